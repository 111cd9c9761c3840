//! Fixed bitboard masks for the 7x9 Jungle board.
//!
//! Bit `n` of a `Bitboard` is square `n` (`row * 7 + col`). Only the low 63
//! bits are ever set. Terrain masks are compile-time constants, so nothing
//! needs initialising before move generation runs.

use crate::game_state::jungle_types::*;

pub type Bitboard = u64;

pub const ALL_SQUARES: Bitboard = (1u64 << NUM_SQUARES) - 1;

pub const FILE_A: Bitboard = file_mask(0);
pub const FILE_G: Bitboard = file_mask(BOARD_WIDTH - 1);
pub const RANK_1: Bitboard = rank_mask(0);
pub const RANK_9: Bitboard = rank_mask(BOARD_HEIGHT - 1);

/// Columns b, c, e, f on rows 4..6.
pub const LAKE_SQUARES: Bitboard = lake_mask();
pub const LAND_SQUARES: Bitboard = ALL_SQUARES & !LAKE_SQUARES;

/// Player One's den (d9).
pub const DEN_PLAYER_ONE: Bitboard = bit(square_from_col_row(3, 8));
/// Player Two's den (d1).
pub const DEN_PLAYER_TWO: Bitboard = bit(square_from_col_row(3, 0));

/// c9, e9, d8.
pub const TRAPS_NEAR_PLAYER_ONE_DEN: Bitboard = bit(square_from_col_row(2, 8))
    | bit(square_from_col_row(4, 8))
    | bit(square_from_col_row(3, 7));
/// c1, e1, d2.
pub const TRAPS_NEAR_PLAYER_TWO_DEN: Bitboard = bit(square_from_col_row(2, 0))
    | bit(square_from_col_row(4, 0))
    | bit(square_from_col_row(3, 1));

#[inline]
pub const fn bit(square: Square) -> Bitboard {
    1u64 << square
}

#[inline]
pub const fn contains(bb: Bitboard, square: Square) -> bool {
    square < NUM_SQUARES && (bb & bit(square)) != 0
}

const fn file_mask(col: u8) -> Bitboard {
    let mut mask = 0u64;
    let mut row = 0;
    while row < BOARD_HEIGHT {
        mask |= bit(square_from_col_row(col, row));
        row += 1;
    }
    mask
}

const fn rank_mask(row: u8) -> Bitboard {
    let mut mask = 0u64;
    let mut col = 0;
    while col < BOARD_WIDTH {
        mask |= bit(square_from_col_row(col, row));
        col += 1;
    }
    mask
}

const fn lake_mask() -> Bitboard {
    let cols = [1u8, 2, 4, 5];
    let mut mask = 0u64;
    let mut row = 3;
    while row <= 5 {
        let mut i = 0;
        while i < cols.len() {
            mask |= bit(square_from_col_row(cols[i], row));
            i += 1;
        }
        row += 1;
    }
    mask
}

/// Den the player defends (and may never enter).
#[inline]
pub const fn own_den(player: Player) -> Bitboard {
    match player {
        Player::One => DEN_PLAYER_ONE,
        Player::Two => DEN_PLAYER_TWO,
    }
}

/// Den the player must reach to win.
#[inline]
pub const fn target_den(player: Player) -> Bitboard {
    own_den(player.opposite())
}

/// Traps that weaken `player`'s pieces: the ones around the opponent's den.
#[inline]
pub const fn traps_weakening(player: Player) -> Bitboard {
    match player {
        Player::One => TRAPS_NEAR_PLAYER_TWO_DEN,
        Player::Two => TRAPS_NEAR_PLAYER_ONE_DEN,
    }
}

/// Orthogonal neighbours of a single square, clipped at the board edges.
#[inline]
pub const fn orthogonal_neighbours(square: Square) -> Bitboard {
    let piece = bit(square);
    let mut out = 0u64;
    if piece & RANK_9 == 0 {
        out |= piece << BOARD_WIDTH;
    }
    if piece & RANK_1 == 0 {
        out |= piece >> BOARD_WIDTH;
    }
    if piece & FILE_G == 0 {
        out |= piece << 1;
    }
    if piece & FILE_A == 0 {
        out |= piece >> 1;
    }
    out
}

/// Iterator over set squares, lowest first.
#[derive(Debug, Clone, Copy)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[inline]
pub fn squares(bb: Bitboard) -> Squares {
    Squares(bb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn land_and_lake_partition_the_board() {
        assert_eq!(LAND_SQUARES | LAKE_SQUARES, ALL_SQUARES);
        assert_eq!(LAND_SQUARES & LAKE_SQUARES, 0);
        assert_eq!(LAKE_SQUARES.count_ones(), 12);
        assert_eq!(ALL_SQUARES.count_ones(), 63);
    }

    #[test]
    fn dens_and_traps_sit_where_expected() {
        assert!(contains(DEN_PLAYER_ONE, 59)); // d9
        assert!(contains(DEN_PLAYER_TWO, 3)); // d1
        assert_eq!(TRAPS_NEAR_PLAYER_ONE_DEN.count_ones(), 3);
        assert_eq!(TRAPS_NEAR_PLAYER_TWO_DEN.count_ones(), 3);
        assert!(contains(TRAPS_NEAR_PLAYER_TWO_DEN, 10)); // d2
        assert!(contains(TRAPS_NEAR_PLAYER_ONE_DEN, 52)); // d8
        assert_eq!((DEN_PLAYER_ONE | DEN_PLAYER_TWO) & LAKE_SQUARES, 0);
    }

    #[test]
    fn neighbours_do_not_wrap_around_files() {
        // a2 (7) must not see g1 (6).
        let n = orthogonal_neighbours(7);
        assert_eq!(squares(n).collect::<Vec<_>>(), vec![0, 8, 14]);
        // g9 corner has exactly two neighbours.
        assert_eq!(orthogonal_neighbours(62).count_ones(), 2);
    }
}
