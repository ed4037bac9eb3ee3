//! Line-oriented event scripts replayed against a board.
//!
//! # Responsibility
//! - Parse presentation events (`focus`, `type`, `submit`, ...) from text.
//! - Drive a `QuadrantBoard` in script order and render it as text.
//!
//! # Invariants
//! - Events are applied strictly in line order.
//! - Tasks are addressed by 1-based position within their quadrant.

use menudo_core::{Quadrant, QuadrantBoard, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// One scripted presentation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Focus(Quadrant),
    Type(Quadrant, String),
    Submit(Quadrant),
    Blur(Quadrant),
    Edit(Quadrant, usize),
    Buffer(String),
    Commit,
    Resign,
    Toggle(Quadrant, usize),
    Delete(Quadrant, usize),
    Show,
}

/// Script failure with its 1-based line number.
#[derive(Debug)]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl Error for ScriptError {}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line.trim_end(), ""));
    let command = match verb {
        "focus" => Command::Focus(parse_quadrant(rest)?),
        "type" => {
            let (key, text) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            Command::Type(parse_quadrant(key)?, text.to_string())
        }
        "submit" => Command::Submit(parse_quadrant(rest)?),
        "blur" => Command::Blur(parse_quadrant(rest)?),
        "edit" => {
            let (quadrant, position) = parse_position(rest)?;
            Command::Edit(quadrant, position)
        }
        "buffer" => Command::Buffer(rest.to_string()),
        "commit" => Command::Commit,
        "resign" => Command::Resign,
        "toggle" => {
            let (quadrant, position) = parse_position(rest)?;
            Command::Toggle(quadrant, position)
        }
        "delete" => {
            let (quadrant, position) = parse_position(rest)?;
            Command::Delete(quadrant, position)
        }
        "show" => Command::Show,
        other => return Err(format!("unknown command `{other}`")),
    };
    Ok(Some(command))
}

/// Replays `source` against `board`, writing `show` output to `out`.
pub fn run_script(
    board: &mut QuadrantBoard,
    source: &str,
    out: &mut impl Write,
) -> Result<(), ScriptError> {
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let fail = |message: String| ScriptError { line, message };

        let Some(command) = parse_line(raw).map_err(fail)? else {
            continue;
        };
        apply(board, command, out).map_err(fail)?;
    }
    Ok(())
}

fn apply(board: &mut QuadrantBoard, command: Command, out: &mut impl Write) -> Result<(), String> {
    match command {
        Command::Focus(quadrant) => {
            board.on_draft_focus(quadrant);
        }
        Command::Type(quadrant, text) => {
            board.on_draft_change(quadrant, text);
        }
        Command::Submit(quadrant) => {
            board.on_draft_submit(quadrant);
        }
        Command::Blur(quadrant) => {
            board.on_draft_blur(quadrant);
        }
        Command::Edit(quadrant, position) => {
            let id = task_at(board, quadrant, position)?;
            board.on_edit_start(id);
        }
        Command::Buffer(text) => {
            if !board.on_edit_buffer_change(text) {
                return Err("no task is being edited".to_string());
            }
        }
        Command::Commit => {
            board.on_edit_commit();
        }
        Command::Resign => {
            board.on_resign_focus();
        }
        Command::Toggle(quadrant, position) => {
            let id = task_at(board, quadrant, position)?;
            if !board.is_editable(id) {
                return Err(format!("task {position} in {quadrant} is being edited"));
            }
            board.toggle_task(id);
        }
        Command::Delete(quadrant, position) => {
            let id = task_at(board, quadrant, position)?;
            if !board.is_editable(id) {
                return Err(format!("task {position} in {quadrant} is being edited"));
            }
            board.delete_task(id);
        }
        Command::Show => {
            out.write_all(render_board(board).as_bytes())
                .map_err(|err| format!("failed to write output: {err}"))?;
        }
    }
    Ok(())
}

/// Plain-text board rendering in row-major quadrant order.
pub fn render_board(board: &QuadrantBoard) -> String {
    let mut rendered = String::new();
    for quadrant in Quadrant::ALL {
        rendered.push_str(&format!("[{}] {}\n", quadrant.key(), quadrant.title()));
        for (position, task) in board.tasks_for(quadrant).enumerate() {
            let mark = if task.is_completed { "x" } else { " " };
            let suffix = if board.is_editable(task.id) {
                ""
            } else {
                " (editing)"
            };
            rendered.push_str(&format!(
                "  {}. [{mark}] {}{suffix}\n",
                position + 1,
                task.title
            ));
        }
        let draft = board.draft_text(quadrant);
        if !draft.is_empty() {
            rendered.push_str(&format!("  draft: {draft:?}\n"));
        }
    }
    rendered
}

fn task_at(board: &QuadrantBoard, quadrant: Quadrant, position: usize) -> Result<TaskId, String> {
    position
        .checked_sub(1)
        .and_then(|index| board.tasks_for(quadrant).nth(index))
        .map(|task| task.id)
        .ok_or_else(|| format!("no task {position} in {quadrant}"))
}

fn parse_quadrant(raw: &str) -> Result<Quadrant, String> {
    raw.parse::<Quadrant>().map_err(|err| err.to_string())
}

fn parse_position(raw: &str) -> Result<(Quadrant, usize), String> {
    let mut parts = raw.split_whitespace();
    let quadrant = parse_quadrant(parts.next().unwrap_or(""))?;
    let position = parts
        .next()
        .ok_or_else(|| "missing task position".to_string())?;
    let position = position
        .parse::<usize>()
        .map_err(|_| format!("invalid task position `{position}`"))?;
    Ok((quadrant, position))
}
