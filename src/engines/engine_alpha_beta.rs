//! Fixed-depth alpha-beta engine.
//!
//! Owns the hash keys, the transposition table and the evaluator so several
//! independent engines can coexist in one process.

use crate::config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::game_state::{BoardState, PositionKey};
use crate::moves::move_descriptions::format_optional_move;
use crate::search::alpha_beta::{find_best_move, AiMoveResult};
use crate::search::board_scoring::{BoardScorer, MaterialPstScorer};
use crate::search::piece_square_tables::PieceSquareTables;
use crate::search::transposition_table::{TTStats, TranspositionTable};
use crate::search::zobrist::ZobristKeys;

pub struct AlphaBetaEngine<S: BoardScorer = MaterialPstScorer> {
    keys: ZobristKeys,
    tt: TranspositionTable,
    scorer: S,
    depth: u8,
    last_result: Option<AiMoveResult>,
}

impl AlphaBetaEngine<MaterialPstScorer> {
    pub fn new(config: &EngineConfig) -> Self {
        let config = config.clone().clamped();
        let scorer = MaterialPstScorer::new(PieceSquareTables::from_preset(config.pst));
        Self::with_scorer(scorer, config.search_depth, config.tt_size_mb)
    }
}

impl Default for AlphaBetaEngine<MaterialPstScorer> {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(scorer: S, depth: u8, tt_size_mb: usize) -> Self {
        Self {
            keys: ZobristKeys::new(),
            tt: TranspositionTable::with_megabytes(tt_size_mb),
            scorer,
            depth,
            last_result: None,
        }
    }

    #[inline]
    pub fn keys(&self) -> &ZobristKeys {
        &self.keys
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn table_stats(&self) -> TTStats {
        self.tt.stats()
    }

    pub fn last_result(&self) -> Option<&AiMoveResult> {
        self.last_result.as_ref()
    }

    /// Run one search without going through the trait.
    pub fn search(&mut self, board: &BoardState, history: &[PositionKey]) -> AiMoveResult {
        let result = find_best_move(board, self.depth, history, &self.keys, &mut self.tt, &self.scorer);
        self.last_result = Some(result);
        result
    }
}

impl<S: BoardScorer + Send> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "Jungle AlphaBeta"
    }

    fn new_game(&mut self) {
        self.tt.clear();
        self.last_result = None;
    }

    fn history_diverged(&mut self) {
        self.tt.clear();
    }

    fn choose_move(&mut self, board: &BoardState, history: &[PositionKey]) -> EngineResult<EngineOutput> {
        if board.side_to_move.is_none() {
            return Err(EngineError::GameOver);
        }
        let result = self.search(board, history);
        let stats = self.tt.stats();
        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            nodes: result.nodes_searched,
            info_lines: vec![format!(
                "depth {} move {} score {} nodes {} nps {:.0} root_moves {} tt_used {:.1}%",
                self.depth,
                format_optional_move(result.best_move),
                result.score,
                result.nodes_searched,
                result.nodes_per_second(),
                result.root_move_count,
                stats.utilization_percent,
            )],
        })
    }
}
