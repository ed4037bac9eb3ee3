//! CLI event-script driver.
//!
//! # Responsibility
//! - Replay a presentation event script against a fresh board.
//! - Print the resulting board as text or JSON.

mod script;

use clap::Parser;
use log::info;
use menudo_core::{init_logging, LoggingConfig, QuadrantBoard};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Replays a board event script and prints the resulting board.
#[derive(Parser, Debug)]
#[command(name = "menudo", version)]
struct Cli {
    /// Print the final board snapshot as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Event script to replay; stdin is read when omitted.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match LoggingConfig::from_env() {
        Ok(config) => {
            if let Err(err) = init_logging(&config) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    let source = match read_source(cli.script.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut board = QuadrantBoard::new();
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = script::run_script(&mut board, &source, &mut stdout) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    info!(
        "event=script_done module=cli status=ok tasks={}",
        board.store().len()
    );

    if cli.json {
        match serde_json::to_string_pretty(&board.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to encode board: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", script::render_board(&board));
    }
    ExitCode::SUCCESS
}

fn read_source(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read script `{}`: {err}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(source)
        }
    }
}
