//! Ship definition and per-ship hit tracking.

use crate::common::ShotResult;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The opposite orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cells covered by a hull of `length` anchored at (`row`, `col`),
    /// extending along this orientation.
    pub fn span(self, anchor: (usize, usize), length: usize) -> Vec<(usize, usize)> {
        let (row, col) = anchor;
        (0..length)
            .map(|i| match self {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect()
    }
}

/// A ship anchored on the board, with per-cell hit flags.
///
/// Construction performs no validation; bounds and overlap are checked by
/// the board before a ship is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: (usize, usize),
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
    hits: Vec<bool>,
}

impl Ship {
    pub fn new(length: usize, anchor: (usize, usize), orientation: Orientation) -> Self {
        Ship {
            length,
            anchor,
            orientation,
            cells: orientation.span(anchor, length),
            hits: vec![false; length],
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

    /// Cells occupied by the ship, in anchor-outward order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Number of distinct cells hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// All cells hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Register a shot at (`row`, `col`).
    ///
    /// A coordinate outside the hull is a `Miss` and mutates nothing.
    /// Striking an intact cell records it; striking an already-hit cell is
    /// idempotent and reports the current status, so repeated shots never
    /// inflate the hit count.
    pub fn hit(&mut self, row: usize, col: usize) -> ShotResult {
        match self.cells.iter().position(|&cell| cell == (row, col)) {
            None => ShotResult::Miss,
            Some(i) => {
                self.hits[i] = true;
                if self.is_sunk() {
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
        }
    }
}
