//! Move application on board snapshots.
//!
//! `try_apply_move` is the strict form used where a bad move is a caller bug
//! worth reporting. `apply_move` is the lenient form used by search and move
//! generation: a malformed move is logged and produces an unchanged copy.

use tracing::warn;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board_masks::contains;
use crate::game_state::game_state::BoardState;
use crate::game_state::jungle_types::NUM_SQUARES;
use crate::moves::move_descriptions::Move;
use crate::search::zobrist::ZobristKeys;

pub fn try_apply_move(
    board: &BoardState,
    mv: Move,
    keys: &ZobristKeys,
) -> EngineResult<BoardState> {
    let malformed = |reason: &str| EngineError::MalformedMove {
        mv,
        reason: reason.to_owned(),
    };

    let mover = board.side_to_move.ok_or_else(|| malformed("game is over"))?;
    if mv.from >= NUM_SQUARES || mv.to >= NUM_SQUARES {
        return Err(malformed("square off the board"));
    }
    if !contains(board.pieces[mover.index()][mv.moved.index()], mv.from) {
        return Err(malformed("moved piece not on origin square"));
    }
    let enemy = mover.opposite();
    if let Some(captured) = mv.captured {
        if !contains(board.pieces[enemy.index()][captured.index()], mv.to) {
            return Err(malformed("captured piece not on destination square"));
        }
    } else if contains(board.occupancy_all, mv.to) {
        return Err(malformed("destination occupied by a non-captured piece"));
    }

    let mut next = *board;

    keys.toggle_piece(&mut next.zobrist_key, mover, mv.moved, mv.from);
    next.pieces[mover.index()][mv.moved.index()] &= !(1u64 << mv.from);

    if let Some(captured) = mv.captured {
        keys.toggle_piece(&mut next.zobrist_key, enemy, captured, mv.to);
        next.pieces[enemy.index()][captured.index()] &= !(1u64 << mv.to);
    }

    keys.toggle_piece(&mut next.zobrist_key, mover, mv.moved, mv.to);
    next.pieces[mover.index()][mv.moved.index()] |= 1u64 << mv.to;

    next.set_side_to_move(keys, Some(enemy));
    next.recalc_occupancy();

    Ok(next)
}

/// Apply `mv`, or log and return an unchanged copy if it does not fit the board.
pub fn apply_move(board: &BoardState, mv: Move, keys: &ZobristKeys) -> BoardState {
    match try_apply_move(board, mv, keys) {
        Ok(next) => next,
        Err(err) => {
            warn!(%err, "apply_move: returning unchanged board");
            let mut copy = *board;
            copy.verify_zobrist_key(keys);
            copy
        }
    }
}
