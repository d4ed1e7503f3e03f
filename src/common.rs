//! Common types: cell states, shot results and game errors.

/// State of a single board cell. Transitions only move forward:
/// `Empty`/`ShipPresent` become `Hit`/`Miss`, and `Hit` cells of a fully
/// depleted ship become `Sunk`. No transition is ever reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Miss,
    ShipPresent,
    Hit,
    Sunk,
}

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed all ships.
    Miss,
    /// Shot struck a ship that still has intact cells.
    Hit,
    /// Shot depleted the last intact cell of a ship.
    Sunk,
}

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement is out of bounds or overlaps another ship.
    InvalidPlacement,
    /// Fired-at coordinate lies outside the board.
    CoordinateOutOfBounds,
    /// Placement attempted after both fleets are already complete.
    FleetAlreadyPlaced,
    /// Shot attempted while fleets are still being placed.
    PlacementIncomplete,
    /// Shot attempted by the side whose turn it is not.
    OutOfTurn,
    /// Operation attempted after the game has ended; reset first.
    AlreadyFinished,
    /// Fleet configuration cannot fit on the board.
    FleetUnplaceable,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlacement => {
                write!(f, "Ship placement is out of bounds or overlaps another ship")
            }
            GameError::CoordinateOutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::FleetAlreadyPlaced => write!(f, "All ships have already been placed"),
            GameError::PlacementIncomplete => write!(f, "Fleets are still being placed"),
            GameError::OutOfTurn => write!(f, "It is the other side's turn"),
            GameError::AlreadyFinished => write!(f, "Game is already over"),
            GameError::FleetUnplaceable => {
                write!(f, "Fleet configuration cannot fit on the board")
            }
        }
    }
}

impl std::error::Error for GameError {}
