//! Turn controller: the select-origin / select-destination state machine.

use std::fmt;

use super::observer::{GameObserver, MoveRecord};
use crate::board::{
    check_report, Board, CheckError, CheckReport, Color, Coord, MoveList, Piece, SelectionError,
};

/// Where the controller is in a ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Waiting for the active player to pick a piece
    #[default]
    AwaitingSelection,
    /// A piece is picked; its destinations are remembered until the next
    /// selection either uses them or discards them
    DestinationHighlighted {
        origin: Coord,
        piece: Piece,
        destinations: MoveList,
    },
}

/// Error type for controller operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The selection was refused; nothing changed except that any pending
    /// selection was discarded
    Selection(SelectionError),
    /// The position is malformed (a king is missing). The move that revealed
    /// it has already been applied.
    Check(CheckError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Selection(e) => write!(f, "Selection rejected: {e}"),
            GameError::Check(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Selection(e) => Some(e),
            GameError::Check(e) => Some(e),
        }
    }
}

impl From<SelectionError> for GameError {
    fn from(e: SelectionError) -> Self {
        GameError::Selection(e)
    }
}

impl From<CheckError> for GameError {
    fn from(e: CheckError) -> Self {
        GameError::Check(e)
    }
}

/// Result of an accepted destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub report: CheckReport,
}

/// Owns the board and the turn state, and is the only thing that mutates
/// the board during a game.
///
/// Moves are pseudo-legal: a player may leave or put their own king in
/// check. The check report after each move says so, but play continues;
/// there is no game-over state.
pub struct TurnController {
    board: Board,
    state: TurnState,
    active: Color,
    ply: u32,
    observer: Option<Box<dyn GameObserver>>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TurnController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnController")
            .field("board", &self.board.to_fen())
            .field("state", &self.state)
            .field("active", &self.active)
            .field("ply", &self.ply)
            .finish_non_exhaustive()
    }
}

impl TurnController {
    /// New game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// New game from an arbitrary placement, White to move.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        TurnController {
            board,
            state: TurnState::AwaitingSelection,
            active: Color::White,
            ply: 0,
            observer: None,
        }
    }

    /// Attach an observer that receives every event.
    #[must_use]
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Start over on `board` with White to move. The observer is kept.
    pub fn reset(&mut self, board: Board) {
        self.board = board;
        self.state = TurnState::AwaitingSelection;
        self.active = Color::White;
        self.ply = 0;
        log::debug!("new game: {}", self.board.to_fen());
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// The player whose piece may be selected next
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Plies played so far
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Destinations of the selected piece, if one is selected
    #[must_use]
    pub fn highlighted(&self) -> Option<&MoveList> {
        match &self.state {
            TurnState::DestinationHighlighted { destinations, .. } => Some(destinations),
            TurnState::AwaitingSelection => None,
        }
    }

    /// Pick the piece to move.
    ///
    /// Accepted only for a piece of the active color that has at least one
    /// destination. On success the controller remembers the selection and
    /// returns the destinations to highlight. On rejection the controller is
    /// left awaiting a selection.
    pub fn select_origin(&mut self, coord: Coord) -> Result<MoveList, SelectionError> {
        self.state = TurnState::AwaitingSelection;

        let result = self.try_select_origin(coord);
        match &result {
            Ok(destinations) => {
                log::debug!("{} selected {coord}", self.active);
                if let Some(obs) = self.observer.as_mut() {
                    obs.on_selection(coord, destinations);
                }
            }
            Err(e) => self.reject(e),
        }
        result
    }

    fn try_select_origin(&mut self, coord: Coord) -> Result<MoveList, SelectionError> {
        let piece = self
            .board
            .occupant_at(coord)
            .ok_or(SelectionError::NoPieceAtOrigin { coord })?;
        if piece.color != self.active {
            return Err(SelectionError::WrongColorSelection {
                coord,
                active: self.active,
            });
        }

        let destinations = self.board.generate_piece_moves(piece.color, piece.kind, coord);
        if destinations.is_empty() {
            return Err(SelectionError::NoLegalMoves { coord, piece });
        }

        self.state = TurnState::DestinationHighlighted {
            origin: coord,
            piece,
            destinations,
        };
        Ok(destinations)
    }

    /// Complete the ply by picking a highlighted square.
    ///
    /// On success the piece is moved, the active color flips and both
    /// kings are checked. Any other square cancels the selection and leaves
    /// the board alone.
    pub fn select_destination(&mut self, coord: Coord) -> Result<MoveOutcome, GameError> {
        let state = std::mem::take(&mut self.state);
        let TurnState::DestinationHighlighted {
            origin,
            piece,
            destinations,
        } = state
        else {
            let err = SelectionError::NoSelection { destination: coord };
            self.reject(&err);
            return Err(err.into());
        };

        if !destinations.contains(coord) || self.board.is_occupied_by(coord, piece.color) {
            let err = SelectionError::IllegalDestination {
                origin,
                destination: coord,
            };
            self.reject(&err);
            return Err(err.into());
        }

        let captured = self.board.apply_move(origin, coord).map(|p| p.kind);
        self.active = self.active.opponent();
        self.ply += 1;

        let report = check_report(&self.board);
        let record = MoveRecord {
            ply: self.ply,
            color: piece.color,
            kind: piece.kind,
            from: origin,
            to: coord,
            captured,
            check: report
                .as_ref()
                .is_ok_and(|r| r.status(piece.color.opponent()).in_check),
        };
        log::debug!("ply {}: {record}", self.ply);

        // The move stands even when a king has gone missing.
        if let Some(obs) = self.observer.as_mut() {
            obs.on_move(&record);
        }
        let report = report?;
        if let Some(obs) = self.observer.as_mut() {
            obs.on_check_report(&report);
        }

        Ok(MoveOutcome { record, report })
    }

    /// Dispatch a coordinate to whichever step the controller is waiting
    /// for. With a piece selected, clicking another of the active player's
    /// pieces switches the selection instead of cancelling it.
    pub fn select(&mut self, coord: Coord) -> Result<Option<MoveOutcome>, GameError> {
        match self.state {
            TurnState::AwaitingSelection => {
                self.select_origin(coord)?;
                Ok(None)
            }
            TurnState::DestinationHighlighted { origin, .. } => {
                if coord != origin && self.board.is_occupied_by(coord, self.active) {
                    self.select_origin(coord)?;
                    return Ok(None);
                }
                self.select_destination(coord).map(Some)
            }
        }
    }

    fn reject(&mut self, error: &SelectionError) {
        log::trace!("{error}");
        if let Some(obs) = self.observer.as_mut() {
            obs.on_rejected(error);
        }
    }
}
