//! Error types for the rules engine.
//!
//! No condition here is fatal: every rejected move leaves the position
//! exactly as it was and the game continues (or stays resolved).

use thiserror::Error;

use crate::game::GameResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The game has already been resolved; no further moves are accepted.
    #[error("game is already over: {result:?}")]
    GameOver { result: GameResult },

    /// Square index outside the board.
    #[error("invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: u8 },

    /// Coordinate string that is not of the `a1`..`h8` form.
    #[error("invalid square coordinate: {coord:?}")]
    InvalidCoord { coord: String },

    /// The origin square is empty.
    #[error("no piece on source square {square}")]
    NoPieceAt { square: u8 },

    /// The origin piece does not belong to the side to move.
    #[error("piece on square {square} does not belong to the side to move")]
    WrongColor { square: u8 },

    /// Fails the movement rules, or would leave the mover's king in check.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: u8, to: u8 },
}

/// Result type alias for rules-engine operations.
pub type RulesResult<T> = Result<T, RulesError>;
