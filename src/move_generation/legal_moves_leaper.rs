//! Lake jumps for the lion and tiger.
//!
//! Vertical jumps start on row 3 or row 7 in a lake column and cross three
//! lake squares. Horizontal jumps start on the a or g file, or on the d file
//! between the two lakes, and cross two lake squares. A rat of either owner
//! anywhere on the crossed squares blocks the jump.

use crate::game_state::board_masks::{bit, contains, Bitboard, LAKE_SQUARES, LAND_SQUARES};
use crate::game_state::jungle_types::*;

const LAKE_COLUMNS: [u8; 4] = [1, 2, 4, 5];
const LAKE_ROWS: std::ops::RangeInclusive<u8> = 3..=5;

/// A straight line over water: the squares crossed and the landing square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpLane {
    pub path: Bitboard,
    pub landing: Square,
}

fn lane(cells: &[(u8, u8)], landing: (u8, u8)) -> JumpLane {
    JumpLane {
        path: cells
            .iter()
            .fold(0, |acc, &(c, r)| acc | bit(square_from_col_row(c, r))),
        landing: square_from_col_row(landing.0, landing.1),
    }
}

/// Every lane a leaper standing on `from` could use, regardless of blockers.
pub fn jump_lanes(from: Square) -> Vec<JumpLane> {
    let mut lanes = Vec::with_capacity(2);
    if contains(LAKE_SQUARES, from) {
        return lanes;
    }
    let (col, row) = col_row_of(from);

    if LAKE_COLUMNS.contains(&col) {
        let water = [(col, 3), (col, 4), (col, 5)];
        match row {
            2 => lanes.push(lane(&water, (col, 6))),
            6 => lanes.push(lane(&water, (col, 2))),
            _ => {}
        }
    }

    if LAKE_ROWS.contains(&row) {
        match col {
            0 => lanes.push(lane(&[(1, row), (2, row)], (3, row))),
            6 => lanes.push(lane(&[(5, row), (4, row)], (3, row))),
            3 => {
                lanes.push(lane(&[(2, row), (1, row)], (0, row)));
                lanes.push(lane(&[(4, row), (5, row)], (6, row)));
            }
            _ => {}
        }
    }

    lanes
}

/// Landing squares of unobstructed jumps from `from`.
pub fn leaper_jump_targets(
    from: Square,
    friendly: Bitboard,
    all_rats: Bitboard,
    own_den: Bitboard,
) -> Bitboard {
    jump_lanes(from)
        .into_iter()
        .filter(|lane| lane.path & LAKE_SQUARES == lane.path && lane.path & all_rats == 0)
        .map(|lane| bit(lane.landing))
        .filter(|&target| target & LAND_SQUARES != 0 && target & (friendly | own_den) == 0)
        .fold(0, |acc, target| acc | target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_masks::{squares, DEN_PLAYER_ONE};

    #[test]
    fn vertical_jump_crosses_three_lake_rows() {
        let from = square_from_col_row(1, 2);
        let targets = leaper_jump_targets(from, 0, 0, DEN_PLAYER_ONE);
        assert_eq!(
            squares(targets).collect::<Vec<_>>(),
            vec![square_from_col_row(1, 6)]
        );
        let back = leaper_jump_targets(square_from_col_row(5, 6), 0, 0, DEN_PLAYER_ONE);
        assert_eq!(back, bit(square_from_col_row(5, 2)));
    }

    #[test]
    fn centre_file_jumps_both_ways() {
        let from = square_from_col_row(3, 4);
        let targets = leaper_jump_targets(from, 0, 0, DEN_PLAYER_ONE);
        assert_eq!(
            squares(targets).collect::<Vec<_>>(),
            vec![square_from_col_row(0, 4), square_from_col_row(6, 4)]
        );
    }

    #[test]
    fn edge_files_jump_to_the_centre() {
        for row in 3..=5 {
            let west = leaper_jump_targets(square_from_col_row(0, row), 0, 0, DEN_PLAYER_ONE);
            let east = leaper_jump_targets(square_from_col_row(6, row), 0, 0, DEN_PLAYER_ONE);
            assert_eq!(west, bit(square_from_col_row(3, row)));
            assert_eq!(east, bit(square_from_col_row(3, row)));
        }
    }

    #[test]
    fn rat_in_the_water_blocks_the_jump() {
        let from = square_from_col_row(2, 2);
        let rat = bit(square_from_col_row(2, 4));
        assert_eq!(leaper_jump_targets(from, 0, rat, DEN_PLAYER_ONE), 0);
        let rat_elsewhere = bit(square_from_col_row(1, 4));
        assert_ne!(leaper_jump_targets(from, 0, rat_elsewhere, DEN_PLAYER_ONE), 0);
    }

    #[test]
    fn friendly_landing_square_blocks_the_jump() {
        let from = square_from_col_row(0, 3);
        let friend = bit(square_from_col_row(3, 3));
        assert_eq!(leaper_jump_targets(from, friend, 0, DEN_PLAYER_ONE), 0);
    }

    #[test]
    fn no_jumps_from_other_squares() {
        for sq in [
            square_from_col_row(0, 2),
            square_from_col_row(3, 2),
            square_from_col_row(1, 1),
            square_from_col_row(6, 6),
            square_from_col_row(1, 4),
        ] {
            assert!(jump_lanes(sq).is_empty(), "square {sq}");
        }
    }
}
