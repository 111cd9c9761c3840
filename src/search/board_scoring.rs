//! Pluggable board evaluation interface and the baseline implementation.
//!
//! Search remains modular by delegating static position scoring to this
//! trait. Scores are signed from the point of view of `perspective`;
//! decisive results use `WIN_SCORE` / `LOSS_SCORE` so search can treat them
//! as terminal.

use crate::game_state::board_masks::{squares, target_den};
use crate::game_state::game_state::BoardState;
use crate::game_state::jungle_types::*;
use crate::search::piece_square_tables::PieceSquareTables;

pub const WIN_SCORE: i32 = 1_000_000_000;
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

#[inline]
pub const fn is_decisive(score: i32) -> bool {
    score == WIN_SCORE || score == LOSS_SCORE
}

pub trait BoardScorer {
    fn score(&self, board: &BoardState, perspective: Player) -> i32;
}

/// Den entry and wipeout detection, then material plus piece-square balance.
#[derive(Debug, Clone, Default)]
pub struct MaterialPstScorer {
    pst: PieceSquareTables,
}

impl MaterialPstScorer {
    pub fn new(pst: PieceSquareTables) -> Self {
        Self { pst }
    }

    pub fn material(board: &BoardState, player: Player) -> i32 {
        ALL_PIECE_KINDS
            .into_iter()
            .map(|kind| {
                board.pieces[player.index()][kind.index()].count_ones() as i32 * kind.value()
            })
            .sum()
    }

    pub fn pst_score(&self, board: &BoardState, player: Player) -> i32 {
        ALL_PIECE_KINDS
            .into_iter()
            .flat_map(|kind| {
                squares(board.pieces[player.index()][kind.index()])
                    .map(move |sq| self.pst.bonus(player, kind, sq))
            })
            .sum()
    }
}

impl BoardScorer for MaterialPstScorer {
    fn score(&self, board: &BoardState, perspective: Player) -> i32 {
        let opponent = perspective.opposite();
        let mine = board.occupancy_by_player[perspective.index()];
        let theirs = board.occupancy_by_player[opponent.index()];

        if mine & target_den(perspective) != 0 {
            return WIN_SCORE;
        }
        if theirs & target_den(opponent) != 0 {
            return LOSS_SCORE;
        }

        match (mine != 0, theirs != 0) {
            (true, false) => return WIN_SCORE,
            (false, true) => return LOSS_SCORE,
            (false, false) => return DRAW_SCORE,
            (true, true) => {}
        }

        (Self::material(board, perspective) - Self::material(board, opponent))
            + (self.pst_score(board, perspective) - self.pst_score(board, opponent))
    }
}
