//! Interactive placement and targeting state.
//!
//! Sessions hold the movable selection for one placement or one shot.
//! Movement produces a new clamped position instead of mutating anything
//! shared; the board is only touched when the selection is confirmed.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::ship::Orientation;

/// Movable anchor and orientation for placing one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSession {
    length: usize,
    anchor: (usize, usize),
    orientation: Orientation,
}

impl PlacementSession {
    /// Start a session for a hull of `length`, anchored at the origin.
    pub fn new(length: usize) -> Self {
        PlacementSession {
            length,
            anchor: (0, 0),
            orientation: Orientation::Horizontal,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Candidate cells under the current anchor and orientation.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        self.orientation.span(self.anchor, self.length)
    }

    /// Move the anchor by (`dr`, `dc`).
    ///
    /// The move is rejected and the anchor stays put when any hull cell
    /// would leave the grid, not just the anchor itself. Returns whether
    /// the anchor moved.
    pub fn move_by(&mut self, dr: isize, dc: isize) -> bool {
        let row = self.anchor.0 as isize + dr;
        let col = self.anchor.1 as isize + dc;
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        let (end_row, end_col) = match self.orientation {
            Orientation::Horizontal => (row, col + self.length - 1),
            Orientation::Vertical => (row + self.length - 1, col),
        };
        if end_row >= BOARD_HEIGHT || end_col >= BOARD_WIDTH {
            return false;
        }
        self.anchor = (row, col);
        true
    }

    /// Toggle orientation, pulling the anchor inward if the rotated hull
    /// would stick out past the grid edge.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.flipped();
        match self.orientation {
            Orientation::Horizontal => {
                self.anchor.1 = self.anchor.1.min(BOARD_WIDTH - self.length);
            }
            Orientation::Vertical => {
                self.anchor.0 = self.anchor.0.min(BOARD_HEIGHT - self.length);
            }
        }
    }
}

/// Single-cell cursor for choosing a shot coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetingSession {
    cursor: (usize, usize),
}

impl TargetingSession {
    pub fn new() -> Self {
        TargetingSession { cursor: (0, 0) }
    }

    pub fn coord(&self) -> (usize, usize) {
        self.cursor
    }

    /// Move the cursor by (`dr`, `dc`), staying on the board. Returns
    /// whether the cursor moved.
    pub fn move_by(&mut self, dr: isize, dc: isize) -> bool {
        let row = self.cursor.0 as isize + dr;
        let col = self.cursor.1 as isize + dc;
        if row < 0 || col < 0 || row as usize >= BOARD_HEIGHT || col as usize >= BOARD_WIDTH {
            return false;
        }
        self.cursor = (row as usize, col as usize);
        true
    }
}

impl Default for TargetingSession {
    fn default() -> Self {
        Self::new()
    }
}
