//! Chess rules engine.
//!
//! One synchronous, in-process [`Game`] owns a single mutable [`Position`]
//! and exposes pure query/mutate operations: pseudo-legal move testing
//! ([`can_move`]), check detection, legality filtering ([`legal_move`]),
//! terminal-state detection, and move application with castling, en passant
//! and promotion. Rendering and input handling are external collaborators
//! that submit `(from, to)` square pairs and draw whatever the engine holds.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export the engine surface
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
