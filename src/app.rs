//! Interactive game loop gluing the engine to a renderer and an input
//! source: placement, alternating turns, game over and restart.

use crate::common::{GameError, ShotResult};
use crate::engine::{GameEngine, Phase, Side};
use crate::input::{InputEvent, InputSource};
use crate::planner::{PlacementSession, TargetingSession};
use crate::render::{coord_label, Renderer};
use rand::Rng;

/// Choice offered once a game has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Restart,
    Exit,
}

fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "miss",
        ShotResult::Hit => "hit!",
        ShotResult::Sunk => "ship sunk!",
    }
}

/// Interactively place every pending player ship.
///
/// Each ship gets a fresh [`PlacementSession`]; an invalid confirm keeps
/// the session alive and re-prompts. Returns `false` if the user quit.
pub fn place_fleet(
    engine: &mut GameEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
) -> anyhow::Result<bool> {
    while let Some(length) = engine.next_player_length() {
        let mut session = PlacementSession::new(length);
        let mut status = format!(
            "Place your length-{} ship: arrows move, r rotates, enter confirms",
            length
        );
        loop {
            let cells = session.cells();
            renderer.render(engine.player_board(), None, Some(&cells), false)?;
            renderer.message(&status)?;
            match input.next_event()? {
                InputEvent::Up => {
                    session.move_by(-1, 0);
                }
                InputEvent::Down => {
                    session.move_by(1, 0);
                }
                InputEvent::Left => {
                    session.move_by(0, -1);
                }
                InputEvent::Right => {
                    session.move_by(0, 1);
                }
                InputEvent::Rotate => session.rotate(),
                InputEvent::Confirm => {
                    match engine.place_player_ship(session.anchor(), session.orientation()) {
                        Ok(()) => break,
                        Err(GameError::InvalidPlacement) => {
                            status = String::from("That spot overlaps another ship, pick another");
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                InputEvent::Quit => return Ok(false),
            }
        }
    }
    Ok(true)
}

/// Let the user move the crosshair and pick a shot coordinate.
/// Returns `None` if the user quit.
pub fn select_target(
    engine: &GameEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    session: &mut TargetingSession,
    reveal: bool,
    status: &str,
) -> anyhow::Result<Option<(usize, usize)>> {
    loop {
        let cursor = [session.coord()];
        renderer.render(
            engine.opponent_board(),
            Some(engine.player_board()),
            Some(&cursor),
            !reveal,
        )?;
        renderer.message(status)?;
        match input.next_event()? {
            InputEvent::Up => {
                session.move_by(-1, 0);
            }
            InputEvent::Down => {
                session.move_by(1, 0);
            }
            InputEvent::Left => {
                session.move_by(0, -1);
            }
            InputEvent::Right => {
                session.move_by(0, 1);
            }
            InputEvent::Rotate => {}
            InputEvent::Confirm => return Ok(Some(session.coord())),
            InputEvent::Quit => return Ok(None),
        }
    }
}

/// Alternate turns until the game finishes or the user quits.
/// Returns the winner, or `None` on quit.
pub fn play<R: Rng + ?Sized>(
    engine: &mut GameEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    rng: &mut R,
    reveal: bool,
) -> anyhow::Result<Option<Side>> {
    // The crosshair keeps its position between turns.
    let mut session = TargetingSession::new();
    let mut status = String::from("Arrows move the crosshair, enter fires");
    while engine.phase() == Phase::Playing {
        let (row, col) =
            match select_target(engine, input, renderer, &mut session, reveal, &status)? {
                Some(coord) => coord,
                None => return Ok(None),
            };
        let result = engine.player_fire(row, col)?;
        status = format!("You fired at {}: {}", coord_label(row, col), describe(result));
        if engine.phase() != Phase::Playing {
            break;
        }
        let ((orow, ocol), oresult) = engine.opponent_fire(rng)?;
        status.push_str(&format!(
            "  Opponent fired at {}: {}",
            coord_label(orow, ocol),
            describe(oresult)
        ));
    }
    Ok(engine.winner())
}

/// Show the final boards and wait for the restart-or-exit choice
/// (`r` restarts, enter or quit exits).
pub fn game_over(
    engine: &GameEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
) -> anyhow::Result<Outcome> {
    renderer.render(
        engine.opponent_board(),
        Some(engine.player_board()),
        None,
        false,
    )?;
    match engine.winner() {
        Some(Side::Player) => {
            renderer.message("You won! Every enemy ship is at the bottom.")?;
        }
        Some(Side::Opponent) => renderer.message("You lost! Your fleet has been destroyed.")?,
        None => {}
    }
    renderer.message("Press r to restart, enter or q to exit")?;
    loop {
        match input.next_event()? {
            InputEvent::Rotate => return Ok(Outcome::Restart),
            InputEvent::Confirm | InputEvent::Quit => return Ok(Outcome::Exit),
            _ => {}
        }
    }
}

/// Full game loop: placement, play, game over, and restart until the user
/// exits.
pub fn run<R: Rng + ?Sized>(
    engine: &mut GameEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    rng: &mut R,
    reveal: bool,
) -> anyhow::Result<()> {
    loop {
        engine.place_opponent_fleet(rng)?;
        if !place_fleet(engine, input, renderer)? {
            return Ok(());
        }
        if play(engine, input, renderer, rng, reveal)?.is_none() {
            return Ok(());
        }
        match game_over(engine, input, renderer)? {
            Outcome::Restart => engine.reset(),
            Outcome::Exit => return Ok(()),
        }
    }
}
