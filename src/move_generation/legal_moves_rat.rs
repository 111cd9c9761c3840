use crate::game_state::board_masks::{orthogonal_neighbours, Bitboard};
use crate::game_state::jungle_types::Square;

/// The rat steps onto land or lake alike; only friends and its own den block it.
#[inline]
pub fn rat_step_targets(from: Square, friendly: Bitboard, own_den: Bitboard) -> Bitboard {
    orthogonal_neighbours(from) & !friendly & !own_den
}
