//! Opponent targeting policy.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use rand::Rng;

/// Pick a target uniformly at random over the whole board, independent of
/// shot history.
///
/// The opponent may re-target cells it has already resolved; such shots
/// are idempotent no-ops on the board. A history-aware policy would play
/// stronger, but this matches the intended difficulty.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> (usize, usize) {
    (
        rng.random_range(0..BOARD_HEIGHT),
        rng.random_range(0..BOARD_WIDTH),
    )
}
