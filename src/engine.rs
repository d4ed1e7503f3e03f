//! Turn controller: owns both boards, sequences placement and combat,
//! and detects game end.

use std::collections::VecDeque;

use crate::ai;
use crate::board::Board;
use crate::common::{GameError, ShotResult};
use crate::config::{self, BOARD_HEIGHT, BOARD_WIDTH};
use crate::ship::Orientation;
use rand::Rng;

/// One of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fleets are being populated.
    Placing,
    /// Strict alternating turns, player first.
    Playing,
    /// Terminal; carries the winning side.
    Finished(Side),
}

/// Game engine holding both boards and the turn state machine.
///
/// Boards are mutated only through the engine; renderers and input
/// sources read them via the accessors.
pub struct GameEngine {
    player_board: Board,
    opponent_board: Board,
    pending_player: VecDeque<usize>,
    pending_opponent: VecDeque<usize>,
    phase: Phase,
    turn: Side,
}

impl GameEngine {
    /// Create an engine in the `Placing` phase with both fleets pending.
    ///
    /// The fleet configuration is validated once here, before placement
    /// begins: every hull must fit the grid, and the fleet must stay
    /// sparse enough that rejection-sampled placement always terminates.
    pub fn new() -> Result<Self, GameError> {
        let lengths: VecDeque<usize> = config::fleet_lengths().collect();
        let cells: usize = lengths.iter().sum();
        let fits = lengths
            .iter()
            .all(|&len| len > 0 && len <= BOARD_WIDTH.min(BOARD_HEIGHT));
        if !fits || cells > BOARD_WIDTH * BOARD_HEIGHT / 2 {
            return Err(GameError::FleetUnplaceable);
        }
        Ok(GameEngine {
            player_board: Board::new(),
            opponent_board: Board::new(),
            pending_player: lengths.clone(),
            pending_opponent: lengths,
            phase: Phase::Placing,
            turn: Side::Player,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side whose turn it is during `Playing`.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Length of the next player ship awaiting placement.
    pub fn next_player_length(&self) -> Option<usize> {
        self.pending_player.front().copied()
    }

    /// Place the next pending player ship at `anchor` with `orientation`.
    ///
    /// An invalid placement leaves the pending queue untouched so the
    /// caller can re-prompt with a new anchor or orientation.
    pub fn place_player_ship(
        &mut self,
        anchor: (usize, usize),
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.ensure_placing()?;
        let length = match self.pending_player.front().copied() {
            Some(len) => len,
            None => return Err(GameError::FleetAlreadyPlaced),
        };
        self.player_board.place_ship(length, anchor, orientation)?;
        self.pending_player.pop_front();
        log::debug!(
            "player placed length-{} ship at {:?} {:?}",
            length,
            anchor,
            orientation
        );
        self.maybe_begin_play();
        Ok(())
    }

    /// Randomly place every pending opponent ship.
    pub fn place_opponent_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_placing()?;
        while let Some(length) = self.pending_opponent.front().copied() {
            let (anchor, orientation) = self.opponent_board.random_placement(rng, length);
            self.opponent_board.place_ship(length, anchor, orientation)?;
            self.pending_opponent.pop_front();
        }
        log::debug!("opponent fleet placed");
        self.maybe_begin_play();
        Ok(())
    }

    /// Resolve the player's shot against the opponent board.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        self.ensure_turn(Side::Player)?;
        let result = self.opponent_board.fire(row, col)?;
        log::debug!("player fired at ({}, {}) -> {:?}", row, col, result);
        self.after_shot(Side::Player, result);
        Ok(result)
    }

    /// Let the opponent take its turn, firing at a random coordinate on
    /// the player board. Returns the chosen coordinate and the result.
    pub fn opponent_fire<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), ShotResult), GameError> {
        self.ensure_turn(Side::Opponent)?;
        let (row, col) = ai::random_target(rng);
        let result = self.player_board.fire(row, col)?;
        log::debug!("opponent fired at ({}, {}) -> {:?}", row, col, result);
        self.after_shot(Side::Opponent, result);
        Ok(((row, col), result))
    }

    /// Clear both boards and fleets and re-enter `Placing`.
    pub fn reset(&mut self) {
        let lengths: VecDeque<usize> = config::fleet_lengths().collect();
        self.player_board = Board::new();
        self.opponent_board = Board::new();
        self.pending_player = lengths.clone();
        self.pending_opponent = lengths;
        self.phase = Phase::Placing;
        self.turn = Side::Player;
        log::info!("game reset");
    }

    fn ensure_placing(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Placing => Ok(()),
            Phase::Playing => Err(GameError::FleetAlreadyPlaced),
            Phase::Finished(_) => Err(GameError::AlreadyFinished),
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        match self.phase {
            Phase::Placing => Err(GameError::PlacementIncomplete),
            Phase::Finished(_) => Err(GameError::AlreadyFinished),
            Phase::Playing if self.turn != side => Err(GameError::OutOfTurn),
            Phase::Playing => Ok(()),
        }
    }

    fn maybe_begin_play(&mut self) {
        if self.phase == Phase::Placing
            && self.pending_player.is_empty()
            && self.pending_opponent.is_empty()
        {
            self.phase = Phase::Playing;
            self.turn = Side::Player;
            log::info!("both fleets placed, combat begins");
        }
    }

    /// Win check and turn hand-off after a resolved shot by `attacker`.
    fn after_shot(&mut self, attacker: Side, result: ShotResult) {
        if result == ShotResult::Sunk {
            log::info!("{:?} sank a ship", attacker);
        }
        let defender_board = match attacker {
            Side::Player => &self.opponent_board,
            Side::Opponent => &self.player_board,
        };
        if defender_board.all_sunk() {
            self.phase = Phase::Finished(attacker);
            log::info!("game over, {:?} wins", attacker);
        } else {
            self.turn = attacker.other();
        }
    }
}
