//! Engine abstraction used by the match harness and the self-play binary.
//!
//! Different strategies sit behind one trait so a caller can pit them against
//! each other without knowing how moves are chosen.

use crate::errors::EngineResult;
use crate::game_state::game_state::{BoardState, PositionKey};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Forget everything learned in a previous game.
    fn new_game(&mut self) {}

    /// The caller's history was rewritten (undo followed by a different move).
    fn history_diverged(&mut self) {}

    /// Pick a move for the side to move; `history` lists the positions before `board`.
    fn choose_move(&mut self, board: &BoardState, history: &[PositionKey]) -> EngineResult<EngineOutput>;
}
