use crate::game_state::board_masks::{orthogonal_neighbours, Bitboard, LAND_SQUARES};
use crate::game_state::jungle_types::Square;

/// One orthogonal step onto land, excluding friendly pieces and the mover's own den.
#[inline]
pub fn orthogonal_step_targets(from: Square, friendly: Bitboard, own_den: Bitboard) -> Bitboard {
    orthogonal_neighbours(from) & LAND_SQUARES & !friendly & !own_den
}

#[cfg(test)]
mod tests {
    use super::orthogonal_step_targets;
    use crate::game_state::board_masks::*;
    use crate::game_state::jungle_types::*;

    #[test]
    fn steppers_stay_out_of_the_lake() {
        // b3 borders b4, which is lake.
        let from = square_from_col_row(1, 2);
        let targets = orthogonal_step_targets(from, 0, DEN_PLAYER_TWO);
        assert!(!contains(targets, square_from_col_row(1, 3)));
        assert_eq!(targets.count_ones(), 3);
    }

    #[test]
    fn steppers_skip_friends_and_own_den() {
        // d2 is next to Player Two's den at d1.
        let from = square_from_col_row(3, 1);
        let friend = bit(square_from_col_row(2, 1));
        let targets = orthogonal_step_targets(from, friend, DEN_PLAYER_TWO);
        assert_eq!(
            squares(targets).collect::<Vec<_>>(),
            vec![square_from_col_row(4, 1), square_from_col_row(3, 2)]
        );
    }
}
