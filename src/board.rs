//! Board state: cell grid plus the ships placed on it.

use crate::common::{CellState, GameError, ShotResult};
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::ship::{Orientation, Ship};
use rand::Rng;

/// A private 10×10 grid and the fleet placed on it.
///
/// Invariant: every `ShipPresent`/`Hit`/`Sunk` cell belongs to exactly one
/// ship, ships never overlap, and all ship cells lie within bounds.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[CellState; BOARD_WIDTH]; BOARD_HEIGHT],
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
            ships: Vec::new(),
        }
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_HEIGHT && col < BOARD_WIDTH
    }

    /// State of a single cell, or `None` outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Ships placed on this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.is_sunk())
    }

    /// Check the full hull: every cell in bounds and free of other ships.
    pub fn is_valid_placement(&self, ship: &Ship) -> bool {
        ship.cells().iter().all(|&(row, col)| {
            Self::in_bounds(row, col) && self.grid[row][col] == CellState::Empty
        })
    }

    /// Validate and place a ship. On success the ship's cells are marked
    /// `ShipPresent` and the placed ship is returned; on failure nothing
    /// is mutated and the caller retries with a new anchor or orientation.
    pub fn place_ship(
        &mut self,
        length: usize,
        anchor: (usize, usize),
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        let ship = Ship::new(length, anchor, orientation);
        if !self.is_valid_placement(&ship) {
            return Err(GameError::InvalidPlacement);
        }
        for &(row, col) in ship.cells() {
            self.grid[row][col] = CellState::ShipPresent;
        }
        self.ships.push(ship);
        let idx = self.ships.len() - 1;
        Ok(&self.ships[idx])
    }

    /// Sample a valid anchor and orientation for a hull of `length`.
    ///
    /// Retries without a cap: the full fleet covers 16 of 100 cells, so a
    /// free spot always exists and the loop terminates with probability one.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> ((usize, usize), Orientation) {
        loop {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_row = if orientation == Orientation::Vertical {
                BOARD_HEIGHT - length
            } else {
                BOARD_HEIGHT - 1
            };
            let max_col = if orientation == Orientation::Horizontal {
                BOARD_WIDTH - length
            } else {
                BOARD_WIDTH - 1
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let candidate = Ship::new(length, (row, col), orientation);
            if self.is_valid_placement(&candidate) {
                return ((row, col), orientation);
            }
        }
    }

    /// Resolve a shot at (`row`, `col`), marking the cell and reporting
    /// the result.
    ///
    /// At most one ship can contain the coordinate. A sinking shot marks
    /// the ship's entire hull `Sunk`, not just the struck cell. Re-firing
    /// at a resolved coordinate is idempotent.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::CoordinateOutOfBounds);
        }
        for ship in &mut self.ships {
            if !ship.contains(row, col) {
                continue;
            }
            let result = ship.hit(row, col);
            match result {
                ShotResult::Sunk => {
                    for &(r, c) in ship.cells() {
                        self.grid[r][c] = CellState::Sunk;
                    }
                }
                _ => self.grid[row][col] = CellState::Hit,
            }
            return Ok(result);
        }
        self.grid[row][col] = CellState::Miss;
        Ok(ShotResult::Miss)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
