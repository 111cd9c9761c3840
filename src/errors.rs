//! Errors used throughout the Jungle engine.
//!
//! `EngineError` is the single error type for the fallible surfaces of the
//! crate: strict move application, game-record navigation, engine front-ends
//! and configuration loading. Move generation and search are infallible; a
//! position with no legal moves is a terminal score, not an error.
//!
//! Usage guidelines:
//! - `MalformedMove` and `HashDesync` indicate a caller bug or corrupted state.
//!   The lenient entry points log them and fall back to a safe value.
//! - `IllegalMove`, `GameOver`, `NothingToUndo`, `NothingToRedo` and
//!   `PlyOutOfRange` are expected, user-facing conditions for an
//!   orchestration layer.
//! - `Config` and `Io` come from loading an `EngineConfig`.

use thiserror::Error;

use crate::game_state::jungle_types::{Player, Square};
use crate::moves::move_descriptions::Move;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The move does not describe a piece of the side to move on its origin square.
    #[error("malformed move {mv}: {reason}")]
    MalformedMove { mv: Move, reason: String },

    /// Incrementally maintained key disagrees with a from-scratch recomputation.
    #[error("zobrist key desync: incremental {incremental:#018x}, recomputed {recomputed:#018x}")]
    HashDesync { incremental: u64, recomputed: u64 },

    /// The transposition table could not reserve its storage.
    #[error("transposition table allocation of {entries} entries failed")]
    TableAllocation { entries: usize },

    /// The move is not in the legal set for the current position.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// No piece of the side to move stands on the square.
    #[error("no piece of {player:?} on square {square}")]
    EmptySquare { player: Player, square: Square },

    /// The game has already been decided.
    #[error("game is over")]
    GameOver,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// A jump target beyond the recorded line.
    #[error("ply {ply} is outside the recorded line of {len} positions")]
    PlyOutOfRange { ply: usize, len: usize },

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
