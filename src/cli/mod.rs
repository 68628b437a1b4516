//! Line-oriented text front-end.
//!
//! Reads one command per line. A bare square (`e2`) is a board click: it
//! selects a piece or, with a piece selected, a destination. Other commands:
//!
//! - `board` - draw the position
//! - `moves <square>` - destinations of whatever stands there, ignoring turn
//! - `check` - check status of both kings
//! - `fen` - piece placement of the current position
//! - `new [fen]` - start again, from the standard layout or a FEN placement
//! - `set <name> <value>`, `options` - display settings
//! - `quit`

use std::io::{self, BufRead, Write};

use crate::board::{check_report, Board, Coord};
use crate::game::{GameError, LogObserver, TurnController};

pub mod options;
pub mod print;

use options::CliOptions;
use print::{render_board, render_report};

/// Interactive session state: the game plus display settings.
#[derive(Debug)]
pub struct Session {
    game: TurnController,
    options: CliOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session {
            game: TurnController::new().with_observer(LogObserver),
            options: CliOptions::default(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &TurnController {
        &self.game
    }

    /// Handle one input line. Returns `Ok(false)` when the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&cmd) = parts.first() else {
            return Ok(true);
        };

        match cmd {
            "quit" | "exit" => return Ok(false),
            "board" => {
                out.write_all(
                    render_board(self.game.board(), self.game.highlighted(), &self.options)
                        .as_bytes(),
                )?;
            }
            "fen" => writeln!(out, "{}", self.game.board().to_fen())?,
            "check" => match check_report(self.game.board()) {
                Ok(report) => out.write_all(render_report(&report).as_bytes())?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "moves" => match parts.get(1).map(|s| s.parse::<Coord>()) {
                Some(Ok(coord)) => {
                    writeln!(out, "moves {coord}: {}", self.game.board().moves_from(coord))?;
                }
                Some(Err(e)) => writeln!(out, "error: {e}")?,
                None => writeln!(out, "error: usage: moves <square>")?,
            },
            "new" => {
                let board = if parts.len() > 1 {
                    match Board::try_from_fen(&parts[1..].join(" ")) {
                        Ok(board) => board,
                        Err(e) => {
                            writeln!(out, "error: {e}")?;
                            return Ok(true);
                        }
                    }
                } else {
                    Board::new()
                };
                self.game.reset(board);
                writeln!(out, "new game, {} to move", self.game.active_color())?;
            }
            "options" => self.options.print(out)?,
            "set" => {
                let name = parts.get(1).copied().unwrap_or_default();
                match self.options.apply_setoption(name, parts.get(2).copied()) {
                    Ok(()) => self.options.print(out)?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            square => match square.parse::<Coord>() {
                Ok(coord) => self.click(coord, out)?,
                Err(_) => writeln!(out, "error: unknown command '{square}'")?,
            },
        }
        Ok(true)
    }

    fn click<W: Write>(&mut self, coord: Coord, out: &mut W) -> io::Result<()> {
        match self.game.select(coord) {
            Ok(None) => {
                if let Some(dests) = self.game.highlighted() {
                    writeln!(out, "selected {coord}: {dests}")?;
                    if self.options.show_destinations {
                        out.write_all(
                            render_board(self.game.board(), Some(dests), &self.options)
                                .as_bytes(),
                        )?;
                    }
                }
            }
            Ok(Some(outcome)) => {
                writeln!(out, "move {}: {}", outcome.record.ply, outcome.record)?;
                out.write_all(render_report(&outcome.report).as_bytes())?;
                if self.options.show_board {
                    out.write_all(
                        render_board(self.game.board(), None, &self.options).as_bytes(),
                    )?;
                }
                writeln!(out, "{} to move", self.game.active_color())?;
            }
            Err(GameError::Selection(e)) => writeln!(out, "rejected: {e}")?,
            Err(e @ GameError::Check(_)) => {
                log::error!("{e}");
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(())
    }
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut session = Session::new();
    writeln!(out, "{} to move", session.game.active_color())?;
    for line in input.lines() {
        let line = line?;
        let keep_going = session.handle_line(line.trim(), out)?;
        out.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}

/// Run on stdin/stdout.
pub fn run_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}
