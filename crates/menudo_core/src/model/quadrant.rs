//! Quadrant model for the urgency x importance board.
//!
//! # Responsibility
//! - Define the closed set of four quadrants and their display metadata.
//! - Provide a fixed four-slot container for per-quadrant state.
//!
//! # Invariants
//! - Quadrants are never created or destroyed at runtime.
//! - `Quadrant::ALL` order is the row-major rendering order of the 2x2 grid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the four fixed board partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Do first.
    UrgentImportant,
    /// Schedule.
    ImportantNotUrgent,
    /// Delegate.
    UrgentNotImportant,
    /// Drop.
    Neither,
}

/// sRGB display color for a quadrant marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl QuadrantColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Renders `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Quadrant {
    /// Row-major rendering order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::ImportantNotUrgent,
        Quadrant::UrgentNotImportant,
        Quadrant::Neither,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::UrgentImportant => "Urgent & Important",
            Self::ImportantNotUrgent => "Important, Not Urgent",
            Self::UrgentNotImportant => "Urgent, Not Important",
            Self::Neither => "Neither",
        }
    }

    pub fn color(self) -> QuadrantColor {
        match self {
            Self::UrgentImportant => QuadrantColor::new(0xff, 0x3b, 0x30),
            Self::ImportantNotUrgent => QuadrantColor::new(0xff, 0x95, 0x00),
            Self::UrgentNotImportant => QuadrantColor::new(0x00, 0x7a, 0xff),
            Self::Neither => QuadrantColor::new(0x8e, 0x8e, 0x93),
        }
    }

    /// Stable identifier used by logs, scripts and the FFI surface.
    pub fn key(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent_important",
            Self::ImportantNotUrgent => "important_not_urgent",
            Self::UrgentNotImportant => "urgent_not_important",
            Self::Neither => "neither",
        }
    }

    /// Position in `Quadrant::ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::UrgentImportant => 0,
            Self::ImportantNotUrgent => 1,
            Self::UrgentNotImportant => 2,
            Self::Neither => 3,
        }
    }

    /// `(row, column)` in the 2x2 grid.
    pub fn grid_position(self) -> (usize, usize) {
        let index = self.index();
        (index / 2, index % 2)
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a quadrant key is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQuadrantError {
    pub value: String,
}

impl Display for ParseQuadrantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown quadrant `{}`; expected urgent_important|important_not_urgent|urgent_not_important|neither",
            self.value
        )
    }
}

impl Error for ParseQuadrantError {}

impl FromStr for Quadrant {
    type Err = ParseQuadrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|quadrant| quadrant.key() == normalized)
            .ok_or_else(|| ParseQuadrantError {
                value: s.trim().to_string(),
            })
    }
}

/// Fixed-size map with exactly one slot per quadrant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadrantMap<T> {
    slots: [T; 4],
}

impl<T> QuadrantMap<T> {
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Self {
            slots: Quadrant::ALL.map(&mut f),
        }
    }

    /// Iterates slots in row-major quadrant order.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &T)> {
        Quadrant::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<Quadrant> for QuadrantMap<T> {
    type Output = T;

    fn index(&self, quadrant: Quadrant) -> &T {
        &self.slots[quadrant.index()]
    }
}

impl<T> IndexMut<Quadrant> for QuadrantMap<T> {
    fn index_mut(&mut self, quadrant: Quadrant) -> &mut T {
        &mut self.slots[quadrant.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{Quadrant, QuadrantMap};

    #[test]
    fn indices_follow_rendering_order() {
        for (position, quadrant) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(quadrant.index(), position);
        }
        assert_eq!(Quadrant::ImportantNotUrgent.grid_position(), (0, 1));
        assert_eq!(Quadrant::UrgentNotImportant.grid_position(), (1, 0));
    }

    #[test]
    fn quadrant_map_slots_are_independent() {
        let mut map = QuadrantMap::<String>::default();
        map[Quadrant::Neither].push_str("later");

        assert_eq!(map[Quadrant::Neither], "later");
        assert!(map[Quadrant::UrgentImportant].is_empty());
        assert_eq!(map.iter().count(), 4);
    }
}
