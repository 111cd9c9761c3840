//! Fixed-depth alpha-beta minimax with a transposition table.
//!
//! Scores are always from the maximizing player's perspective. Table entries
//! are stored from Player One's perspective so one table can serve searches
//! for either side.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::game_state::game_state::{BoardState, PositionKey};
use crate::game_state::jungle_types::Player;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::{format_optional_move, Move};
use crate::search::board_scoring::{is_decisive, BoardScorer, LOSS_SCORE, WIN_SCORE};
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};
use crate::search::zobrist::ZobristKeys;

/// Root ordering bonus for the move suggested by the table.
const TT_MOVE_ORDER_BONUS: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiMoveResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes_searched: u64,
    pub elapsed: Duration,
    pub root_move_count: usize,
}

impl AiMoveResult {
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes_searched as f64 / secs
        } else {
            0.0
        }
    }
}

/// Running result of one interior node.
#[derive(Debug, Clone, Copy)]
struct NodeAcc {
    best_score: i32,
    best_move: Option<Move>,
    alpha: i32,
    beta: i32,
}

/// Convert between maximizer-relative and table (Player One) orientation.
fn orient(score: i32, bound: Bound, maximizer: Player) -> (i32, Bound) {
    match maximizer {
        Player::One => (score, bound),
        Player::Two => {
            let flipped = match bound {
                Bound::Exact => Bound::Exact,
                Bound::Lower => Bound::Upper,
                Bound::Upper => Bound::Lower,
            };
            (score.saturating_neg(), flipped)
        }
    }
}

pub struct Searcher<'a, S: BoardScorer> {
    keys: &'a ZobristKeys,
    tt: &'a mut TranspositionTable,
    scorer: &'a S,
    nodes: u64,
}

impl<'a, S: BoardScorer> Searcher<'a, S> {
    pub fn new(keys: &'a ZobristKeys, tt: &'a mut TranspositionTable, scorer: &'a S) -> Self {
        Self {
            keys,
            tt,
            scorer,
            nodes: 0,
        }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn probe(&mut self, key: u64, maximizer: Player) -> Option<TTEntry> {
        self.tt.probe(key).map(|entry| {
            let (score, bound) = orient(entry.score, entry.bound, maximizer);
            TTEntry {
                score,
                bound,
                ..entry
            }
        })
    }

    fn store(
        &mut self,
        key: u64,
        score: i32,
        depth: u8,
        bound: Bound,
        best_move: Option<Move>,
        maximizer: Player,
    ) {
        let (score, bound) = orient(score, bound, maximizer);
        self.tt.store(TTEntry {
            key,
            best_move,
            score,
            depth,
            bound,
        });
    }

    /// Score `board` to `depth` plies for `maximizer` inside `(alpha, beta)`.
    ///
    /// `history` holds the positions before `board`; it is restored on return.
    pub fn search(
        &mut self,
        board: &BoardState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizer: Player,
        history: &mut Vec<PositionKey>,
    ) -> i32 {
        self.nodes += 1;
        let key = board.zobrist_key;

        let hit = self.probe(key, maximizer);
        if let Some(entry) = hit.filter(|e| e.depth >= depth) {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }

        let static_score = self.scorer.score(board, maximizer);
        if depth == 0 || is_decisive(static_score) {
            self.store(key, static_score, depth, Bound::Exact, None, maximizer);
            return static_score;
        }

        let side = board.side_to_move;
        let mut moves = legal_moves(board, side, history, self.keys);
        let maximizing = side == Some(maximizer);
        if moves.is_empty() {
            let score = if maximizing { LOSS_SCORE } else { WIN_SCORE };
            self.store(key, score, depth, Bound::Exact, None, maximizer);
            return score;
        }

        if let Some(tt_move) = hit.and_then(|e| e.best_move) {
            if let Some(pos) = moves.iter().position(|&mv| mv == tt_move) {
                moves[..=pos].rotate_right(1);
            }
        }

        let window = (alpha, beta);
        let start = NodeAcc {
            best_score: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
            alpha,
            beta,
        };

        history.push(board.position_key());
        let flow = moves.into_iter().try_fold(start, |acc, mv| {
            let child = apply_move(board, mv, self.keys);
            let score = self.search(&child, depth - 1, acc.alpha, acc.beta, maximizer, history);
            let next = if maximizing {
                NodeAcc {
                    best_score: acc.best_score.max(score),
                    best_move: if score > acc.best_score { Some(mv) } else { acc.best_move },
                    alpha: acc.alpha.max(score),
                    ..acc
                }
            } else {
                NodeAcc {
                    best_score: acc.best_score.min(score),
                    best_move: if score < acc.best_score { Some(mv) } else { acc.best_move },
                    beta: acc.beta.min(score),
                    ..acc
                }
            };
            if next.alpha >= next.beta {
                ControlFlow::Break(next)
            } else {
                ControlFlow::Continue(next)
            }
        });
        history.pop();

        let node = match flow {
            ControlFlow::Break(node) | ControlFlow::Continue(node) => node,
        };
        let bound = if node.best_score <= window.0 {
            Bound::Upper
        } else if node.best_score >= window.1 {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.store(key, node.best_score, depth, bound, node.best_move, maximizer);
        node.best_score
    }
}

/// Pick the best move for the side to move in `board`.
///
/// `history` lists the positions before `board`. Every root move is searched
/// with a shared alpha that only narrows, so the reported score is exact.
/// The root result is stored in `tt` before returning.
pub fn find_best_move<S: BoardScorer>(
    board: &BoardState,
    depth: u8,
    history: &[PositionKey],
    keys: &ZobristKeys,
    tt: &mut TranspositionTable,
    scorer: &S,
) -> AiMoveResult {
    let started = Instant::now();
    let Some(root_side) = board.side_to_move else {
        return AiMoveResult {
            best_move: None,
            score: LOSS_SCORE,
            nodes_searched: 0,
            elapsed: started.elapsed(),
            root_move_count: 0,
        };
    };

    let moves = legal_moves(board, Some(root_side), history, keys);
    let root_move_count = moves.len();
    let tt_move = tt.probe(board.zobrist_key).and_then(|e| e.best_move);

    let mut ordered: Vec<(i32, Move, BoardState)> = moves
        .into_iter()
        .map(|mv| {
            let child = apply_move(board, mv, keys);
            let bonus = if Some(mv) == tt_move { TT_MOVE_ORDER_BONUS } else { 0 };
            (scorer.score(&child, root_side).saturating_add(bonus), mv, child)
        })
        .collect();
    ordered.sort_by(|a, b| b.0.cmp(&a.0));

    let mut searcher = Searcher::new(keys, tt, scorer);
    let mut line = history.to_vec();
    line.push(board.position_key());

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best: Option<(Move, i32)> = None;
    for (_, mv, child) in &ordered {
        let score = searcher.search(child, depth.saturating_sub(1), alpha, beta, root_side, &mut line);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
        alpha = alpha.max(score);
    }

    let best_move = best.map(|(mv, _)| mv);
    let score = best.map_or(LOSS_SCORE, |(_, s)| s);
    searcher.store(board.zobrist_key, score, depth, Bound::Exact, best_move, root_side);
    let nodes_searched = searcher.nodes();

    let result = AiMoveResult {
        best_move,
        score,
        nodes_searched,
        elapsed: started.elapsed(),
        root_move_count,
    };
    debug!(
        side = ?root_side,
        depth,
        best = %format_optional_move(best_move),
        score,
        nodes = nodes_searched,
        root_moves = root_move_count,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "search complete"
    );
    result
}
