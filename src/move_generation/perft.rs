//! Perft node counting for move generation validation and benchmarking.
//!
//! The walk carries a position history so the repetition filter is exercised
//! exactly as it is during search.

use crate::game_state::game_state::{BoardState, PositionKey};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::zobrist::ZobristKeys;

/// Count leaf nodes reachable in exactly `depth` plies.
pub fn perft(board: &BoardState, depth: u8, history: &mut Vec<PositionKey>, keys: &ZobristKeys) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, board.side_to_move, history, keys);
    if depth == 1 {
        return moves.len() as u64;
    }

    history.push(board.position_key());
    let nodes = moves
        .into_iter()
        .map(|mv| perft(&apply_move(board, mv, keys), depth - 1, history, keys))
        .sum();
    history.pop();
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(board: &BoardState, depth: u8, keys: &ZobristKeys) -> Vec<(String, u64)> {
    let mut history = Vec::new();
    let moves = legal_moves(board, board.side_to_move, &history, keys);
    history.push(board.position_key());
    moves
        .into_iter()
        .map(|mv| {
            let next = apply_move(board, mv, keys);
            (mv.to_string(), perft(&next, depth.saturating_sub(1), &mut history, keys))
        })
        .collect()
}
