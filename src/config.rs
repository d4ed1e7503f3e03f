//! Compile-time board and fleet constants.

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;

/// Fleet available to each side, as (length, quantity) pairs.
pub const FLEET: [(usize, usize); 3] = [(4, 1), (3, 2), (2, 3)];

/// Number of ships each side places.
pub const FLEET_SHIPS: usize = 6;

/// Total cells covered by one full fleet.
pub const FLEET_CELLS: usize = 16;

/// Iterate the individual ship lengths of the fleet, longest first.
pub fn fleet_lengths() -> impl Iterator<Item = usize> {
    FLEET
        .into_iter()
        .flat_map(|(length, quantity)| core::iter::repeat(length).take(quantity))
}
