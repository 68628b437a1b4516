//! Turn sequencing on top of the board rules.
//!
//! # Example
//! ```
//! use chess_rules::game::TurnController;
//!
//! let mut game = TurnController::new();
//! let dests = game.select_origin("e2".parse().unwrap()).unwrap();
//! assert_eq!(dests.len(), 2);
//! let outcome = game.select_destination("e4".parse().unwrap()).unwrap();
//! assert_eq!(outcome.record.to_string(), "e2-e4");
//! ```

mod controller;
mod observer;

pub use controller::{GameError, MoveOutcome, TurnController, TurnState};
pub use observer::{GameObserver, LogObserver, MoveRecord};
