//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging. Unlike a process-wide
//! table, `ZobristKeys` is an ordinary value: every engine instance owns one
//! and lends it to board mutation and search by reference.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::board_masks::squares;
use crate::game_state::game_state::BoardState;
use crate::game_state::jungle_types::*;

const ZOBRIST_SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    piece_square: [[[u64; NUM_SQUARES as usize]; PIECE_KIND_COUNT]; 2],
    side_to_move: [u64; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    pub fn new() -> Self {
        Self::with_seed(ZOBRIST_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece_square = [[[0u64; NUM_SQUARES as usize]; PIECE_KIND_COUNT]; 2];
        for player in &mut piece_square {
            for kind in player {
                for sq in kind {
                    *sq = next_non_zero(&mut rng);
                }
            }
        }

        let one = next_non_zero(&mut rng);
        let mut two = next_non_zero(&mut rng);
        while two == one {
            two = next_non_zero(&mut rng);
        }

        Self {
            piece_square,
            side_to_move: [one, two],
        }
    }

    /// Key for a `(player, kind, square)` occupancy term.
    #[inline]
    pub fn piece_key(&self, player: Player, kind: PieceKind, square: Square) -> u64 {
        self.piece_square[player.index()][kind.index()][square as usize]
    }

    /// Key xor-ed in while `side` is to move. A finished game contributes nothing.
    #[inline]
    pub fn side_key(&self, side: Option<Player>) -> u64 {
        side.map_or(0, |p| self.side_to_move[p.index()])
    }

    /// Place or remove one piece.
    #[inline]
    pub fn toggle_piece(&self, key: &mut u64, player: Player, kind: PieceKind, square: Square) {
        if square < NUM_SQUARES {
            *key ^= self.piece_key(player, kind, square);
        }
    }

    /// Toggle the side-to-move term. Toggle the old side out before toggling the new side in.
    #[inline]
    pub fn toggle_side(&self, key: &mut u64, side: Option<Player>) {
        *key ^= self.side_key(side);
    }

    /// Compute the full position key from scratch.
    pub fn compute_key(&self, board: &BoardState) -> u64 {
        let mut key = 0u64;
        for player in Player::BOTH {
            for kind in ALL_PIECE_KINDS {
                for sq in squares(board.pieces[player.index()][kind.index()]) {
                    key ^= self.piece_key(player, kind, sq);
                }
            }
        }
        key ^ self.side_key(board.side_to_move)
    }
}

fn next_non_zero(rng: &mut StdRng) -> u64 {
    loop {
        let value: u64 = rng.random();
        if value != 0 {
            return value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZobristKeys;
    use crate::game_state::game_state::BoardState;
    use crate::game_state::jungle_types::*;

    #[test]
    fn keys_are_reproducible_for_a_fixed_seed() {
        assert_eq!(ZobristKeys::new(), ZobristKeys::new());
        assert_ne!(ZobristKeys::new(), ZobristKeys::with_seed(7));
    }

    #[test]
    fn keys_are_non_zero_and_side_keys_differ() {
        let keys = ZobristKeys::new();
        for player in Player::BOTH {
            for kind in ALL_PIECE_KINDS {
                for sq in 0..NUM_SQUARES {
                    assert_ne!(keys.piece_key(player, kind, sq), 0);
                }
            }
        }
        assert_ne!(keys.side_key(Some(Player::One)), 0);
        assert_ne!(
            keys.side_key(Some(Player::One)),
            keys.side_key(Some(Player::Two))
        );
        assert_eq!(keys.side_key(None), 0);
    }

    #[test]
    fn toggling_a_piece_twice_restores_the_key() {
        let keys = ZobristKeys::new();
        let mut key = 0x1234u64;
        keys.toggle_piece(&mut key, Player::Two, PieceKind::Lion, 40);
        assert_ne!(key, 0x1234);
        keys.toggle_piece(&mut key, Player::Two, PieceKind::Lion, 40);
        assert_eq!(key, 0x1234);
    }

    #[test]
    fn start_position_key_matches_incremental_setup() {
        let keys = ZobristKeys::new();
        let board = BoardState::new_game(&keys);
        assert_eq!(board.zobrist_key, keys.compute_key(&board));
    }
}
