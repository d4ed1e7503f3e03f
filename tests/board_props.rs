use armada::{fleet_lengths, Board, CellState, ShotResult, BOARD_HEIGHT, BOARD_WIDTH};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn full_fleet_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for length in fleet_lengths() {
        let (anchor, orientation) = board.random_placement(&mut rng, length);
        board.place_ship(length, anchor, orientation).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random placement of the full fleet always terminates with a valid,
    /// pairwise-disjoint, in-bounds layout.
    #[test]
    fn full_fleet_always_places(seed in any::<u64>()) {
        let board = full_fleet_board(seed);
        let mut seen = std::collections::HashSet::new();
        for ship in board.ships() {
            for &(r, c) in ship.cells() {
                prop_assert!(r < BOARD_HEIGHT && c < BOARD_WIDTH);
                prop_assert!(seen.insert((r, c)));
                prop_assert_eq!(board.cell(r, c), Some(CellState::ShipPresent));
            }
        }
    }

    /// Shelling the entire board sinks everything; ship cells end `Sunk`
    /// and open water ends `Miss`.
    #[test]
    fn saturation_fire_sinks_all(seed in any::<u64>()) {
        let mut board = full_fleet_board(seed);
        for r in 0..BOARD_HEIGHT {
            for c in 0..BOARD_WIDTH {
                board.fire(r, c).unwrap();
            }
        }
        prop_assert!(board.all_sunk());
        for r in 0..BOARD_HEIGHT {
            for c in 0..BOARD_WIDTH {
                let state = board.cell(r, c).unwrap();
                prop_assert!(state == CellState::Sunk || state == CellState::Miss);
            }
        }
    }

    /// A ship sinks exactly when its distinct hit cells reach its length;
    /// repeated strikes on the same cell never advance the count.
    #[test]
    fn sunk_requires_distinct_hits(seed in any::<u64>(), ship_idx in 0..6usize) {
        let mut board = full_fleet_board(seed);
        let cells: Vec<(usize, usize)> = board.ships()[ship_idx].cells().to_vec();

        let (last, rest) = cells.split_last().unwrap();
        for &(r, c) in rest {
            prop_assert_eq!(board.fire(r, c).unwrap(), ShotResult::Hit);
        }
        // hammering an already-hit cell must not sink the ship
        if let Some(&(r, c)) = rest.first() {
            prop_assert_eq!(board.fire(r, c).unwrap(), ShotResult::Hit);
            prop_assert!(!board.ships()[ship_idx].is_sunk());
        }
        prop_assert_eq!(board.fire(last.0, last.1).unwrap(), ShotResult::Sunk);
        prop_assert!(board.ships()[ship_idx].is_sunk());
        for &(r, c) in &cells {
            prop_assert_eq!(board.cell(r, c), Some(CellState::Sunk));
        }
    }

    /// Re-firing any coordinate leaves every cell of the board unchanged.
    #[test]
    fn refire_leaves_board_unchanged(
        seed in any::<u64>(),
        row in 0..BOARD_HEIGHT,
        col in 0..BOARD_WIDTH,
    ) {
        let mut board = full_fleet_board(seed);
        board.fire(row, col).unwrap();
        let snapshot: Vec<Option<CellState>> = (0..BOARD_HEIGHT)
            .flat_map(|r| (0..BOARD_WIDTH).map(move |c| (r, c)))
            .map(|(r, c)| board.cell(r, c))
            .collect();

        board.fire(row, col).unwrap();
        let after: Vec<Option<CellState>> = (0..BOARD_HEIGHT)
            .flat_map(|r| (0..BOARD_WIDTH).map(move |c| (r, c)))
            .map(|(r, c)| board.cell(r, c))
            .collect();
        prop_assert_eq!(snapshot, after);
    }
}
