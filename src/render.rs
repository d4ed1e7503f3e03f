//! Board rendering behind a narrow trait.
//!
//! The engine never formats anything itself; it hands boards to a
//! [`Renderer`] and stays independently testable.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::board::Board;
use crate::common::CellState;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

/// Draws game state for the user.
///
/// `primary` is the board currently being acted on (aimed at during play,
/// placed on during setup); `secondary`, when present, is the viewer's own
/// board drawn below it. `selection` cells are highlighted. With
/// `hide_ships` set, un-hit ship cells of `primary` render as open water,
/// so an opponent board reveals nothing that has not been shot.
pub trait Renderer {
    fn render(
        &mut self,
        primary: &Board,
        secondary: Option<&Board>,
        selection: Option<&[(usize, usize)]>,
        hide_ships: bool,
    ) -> io::Result<()>;

    /// Append a status line below the boards.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Human-readable label for a coordinate, e.g. `B4`.
pub fn coord_label(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

fn cell_char(state: CellState, hide_ships: bool) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Miss => 'o',
        CellState::ShipPresent if hide_ships => '.',
        CellState::ShipPresent => 'S',
        CellState::Hit => 'X',
        CellState::Sunk => '#',
    }
}

/// Plain-text renderer writing to any sink. Lines end with `\r\n` because
/// the terminal sits in raw mode while the game runs.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        TextRenderer { out: io::stdout() }
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    /// Consume the renderer and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn caption(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}\r\n", text)
    }

    fn draw_board(
        &mut self,
        board: &Board,
        selection: Option<&[(usize, usize)]>,
        hide_ships: bool,
    ) -> io::Result<()> {
        write!(self.out, "   ")?;
        for col in 0..BOARD_WIDTH {
            write!(self.out, " {} ", (b'A' + col as u8) as char)?;
        }
        write!(self.out, "\r\n")?;
        for row in 0..BOARD_HEIGHT {
            write!(self.out, "{:2} ", row + 1)?;
            for col in 0..BOARD_WIDTH {
                let state = board.cell(row, col).unwrap_or(CellState::Empty);
                let ch = cell_char(state, hide_ships);
                let selected = selection.map_or(false, |cells| cells.contains(&(row, col)));
                if selected {
                    write!(self.out, "[{}]", ch)?;
                } else {
                    write!(self.out, " {} ", ch)?;
                }
            }
            write!(self.out, "\r\n")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(
        &mut self,
        primary: &Board,
        secondary: Option<&Board>,
        selection: Option<&[(usize, usize)]>,
        hide_ships: bool,
    ) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        match secondary {
            Some(own) => {
                self.caption("Opponent waters")?;
                self.draw_board(primary, selection, hide_ships)?;
                self.caption("Your fleet")?;
                self.draw_board(own, None, false)?;
            }
            None => {
                self.caption("Your fleet")?;
                self.draw_board(primary, selection, hide_ships)?;
            }
        }
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}\r\n", text)?;
        self.out.flush()
    }
}

/// Renderer that draws nothing; lets tests drive the game loops headless.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(
        &mut self,
        _primary: &Board,
        _secondary: Option<&Board>,
        _selection: Option<&[(usize, usize)]>,
        _hide_ships: bool,
    ) -> io::Result<()> {
        Ok(())
    }

    fn message(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}
