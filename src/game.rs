use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Position;
use crate::error::{RulesError, RulesResult};
use crate::movegen::{can_move, has_legal_move, legal_destinations, legal_move};
use crate::types::{Color, Move, coord_to_sq, sq_to_coord};

/// What happened to a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied, game continues.
    Applied,
    /// Move applied and the opponent has no reply while in check.
    /// Carries the winner (the side that just moved).
    Checkmate(Color),
    /// Move applied and the opponent has no reply but is not in check.
    Stalemate,
}

/// Terminal resolution of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Checkmate(Color),
    Stalemate,
}

impl GameResult {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate(winner) => Some(winner),
            GameResult::Stalemate => None,
        }
    }
}

/// One game of chess: the single mutable [`Position`] plus the resolved
/// result once the game ends. All mutation goes through [`Game::attempt_move`];
/// every rejected move leaves the position untouched.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial placement, White to move, all castling rights set.
    pub fn new() -> Self {
        Game {
            position: Position::startpos(),
            result: None,
        }
    }

    /// Wrap an arbitrary position, resolving it immediately if the side to
    /// move already has no legal reply.
    pub fn from_position(position: Position) -> Self {
        let result = if has_legal_move(&position) {
            None
        } else if position.in_check(position.side_to_move) {
            Some(GameResult::Checkmate(position.side_to_move.other()))
        } else {
            Some(GameResult::Stalemate)
        };
        Game { position, result }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn winner(&self) -> Option<Color> {
        self.result.and_then(GameResult::winner)
    }

    /// Attempt the move `from -> to` for the side to move.
    ///
    /// The piece is read off the board; castling, en passant and promotion
    /// are recognized from the move geometry. On rejection the position is
    /// unchanged and the reason comes back as a [`RulesError`]. On success
    /// the side to move flips and the new side's situation is evaluated:
    /// no reply while in check is checkmate, no reply otherwise stalemate.
    pub fn attempt_move(&mut self, from: u8, to: u8) -> RulesResult<MoveOutcome> {
        if let Some(result) = self.result {
            return Err(RulesError::GameOver { result });
        }
        if from >= 64 {
            return Err(RulesError::InvalidSquare { square: from });
        }
        if to >= 64 {
            return Err(RulesError::InvalidSquare { square: to });
        }
        let piece = match self.position.piece_at(from) {
            Some(p) => p,
            None => return Err(RulesError::NoPieceAt { square: from }),
        };
        if piece.color != self.position.side_to_move {
            return Err(RulesError::WrongColor { square: from });
        }
        if !can_move(&self.position, piece, from, to) || !legal_move(&self.position, piece, from, to)
        {
            debug!(
                from = %sq_to_coord(from),
                to = %sq_to_coord(to),
                "rejected illegal move"
            );
            return Err(RulesError::IllegalMove { from, to });
        }

        self.position.make_move(Move::new(from, to));

        let next = self.position.side_to_move;
        if !has_legal_move(&self.position) {
            if self.position.in_check(next) {
                let winner = next.other();
                self.result = Some(GameResult::Checkmate(winner));
                info!(winner = ?winner, "checkmate");
                return Ok(MoveOutcome::Checkmate(winner));
            }
            self.result = Some(GameResult::Stalemate);
            info!("stalemate");
            return Ok(MoveOutcome::Stalemate);
        }
        Ok(MoveOutcome::Applied)
    }

    /// [`Game::attempt_move`] with `a1`-style coordinates, for text
    /// front ends.
    pub fn attempt_move_coords(&mut self, from: &str, to: &str) -> RulesResult<MoveOutcome> {
        let f = coord_to_sq(from).ok_or_else(|| RulesError::InvalidCoord {
            coord: from.to_string(),
        })?;
        let t = coord_to_sq(to).ok_or_else(|| RulesError::InvalidCoord {
            coord: to.to_string(),
        })?;
        self.attempt_move(f, t)
    }

    /// Legal destination squares for the piece on `from`; empty when the
    /// square is empty. Read-only, for move-highlighting front ends.
    pub fn legal_destinations(&self, from: u8) -> Vec<u8> {
        if from >= 64 {
            return Vec::new();
        }
        legal_destinations(&self.position, from)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
