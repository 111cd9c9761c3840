//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used as a baseline
//! opponent and for integration testing.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::game_state::{BoardState, PositionKey};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::zobrist::ZobristKeys;

pub struct RandomEngine {
    keys: ZobristKeys,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            keys: ZobristKeys::new(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            keys: ZobristKeys::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Jungle Random"
    }

    fn choose_move(&mut self, board: &BoardState, history: &[PositionKey]) -> EngineResult<EngineOutput> {
        if board.side_to_move.is_none() {
            return Err(EngineError::GameOver);
        }
        let moves = legal_moves(board, board.side_to_move, history, &self.keys);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", moves.len()));
        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
