//! Input event sources.
//!
//! The engine consumes a stream of discrete movement/rotate/confirm
//! events; where they come from is hidden behind [`InputSource`].

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// One discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Rotate,
    Confirm,
    Quit,
}

/// Blocking source of input events. Each call waits for the next action.
pub trait InputSource {
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Keyboard input via crossterm: arrows move, `r` rotates, enter or space
/// confirms, `q`/escape/ctrl-c quits.
///
/// Puts the terminal into raw mode for its lifetime.
pub struct CrosstermInput {
    _private: (),
}

impl CrosstermInput {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(CrosstermInput { _private: () })
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(InputEvent::Quit);
            }
            let ev = match key.code {
                KeyCode::Up => InputEvent::Up,
                KeyCode::Down => InputEvent::Down,
                KeyCode::Left => InputEvent::Left,
                KeyCode::Right => InputEvent::Right,
                KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Rotate,
                KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
                KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
                _ => continue,
            };
            return Ok(ev);
        }
    }
}

/// Canned event sequence; lets tests drive the interactive loops.
/// Reports `Quit` once the script runs out.
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        ScriptedInput {
            events: events.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }
}
