//! Events emitted by the turn controller for rendering, notation and logs.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{CheckReport, Color, Coord, MoveList, PieceKind, SelectionError};

/// One applied ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    /// 1-based ply number
    pub ply: u32,
    pub color: Color,
    pub kind: PieceKind,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<PieceKind>,
    /// The move left the opponent's king attacked
    pub check: bool,
}

impl fmt::Display for MoveRecord {
    /// Long algebraic: `Nb1-c3`, `e4xd5`, `Qd1-h5+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind != PieceKind::Pawn {
            write!(f, "{}", self.kind.to_char().to_ascii_uppercase())?;
        }
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if self.check {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// Receives controller events. Every method defaults to doing nothing.
pub trait GameObserver {
    /// An origin was accepted; `destinations` should be highlighted.
    fn on_selection(&mut self, _origin: Coord, _destinations: &MoveList) {}

    /// A selection was rejected and the controller is awaiting an origin.
    fn on_rejected(&mut self, _error: &SelectionError) {}

    fn on_move(&mut self, _record: &MoveRecord) {}

    fn on_check_report(&mut self, _report: &CheckReport) {}
}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_selection(&mut self, origin: Coord, destinations: &MoveList) {
        log::debug!("selected {origin}: {destinations}");
    }

    fn on_rejected(&mut self, error: &SelectionError) {
        log::trace!("rejected: {error}");
    }

    fn on_move(&mut self, record: &MoveRecord) {
        log::info!("{}. {} {}", record.ply, record.color, record);
    }

    fn on_check_report(&mut self, report: &CheckReport) {
        for status in [&report.white, &report.black] {
            if !status.in_check {
                continue;
            }
            log::warn!(
                "{} is in check by {} {} piece(s)",
                status.color,
                status.attackers.len(),
                status.color.opponent()
            );
            for t in &status.attackers {
                log::warn!("{} {} is threatening from {}", t.color, t.kind, t.coord);
            }
        }
    }
}
