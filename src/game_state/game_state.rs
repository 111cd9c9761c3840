//! Core bitboard board state representation.
//!
//! `BoardState` is the central model for the engine. It stores piece
//! bitboards, occupancy caches, the side to move and the running Zobrist key.
//! Boards are small `Copy` values: search hands every branch its own
//! snapshot instead of making and unmaking moves on a shared board.

use tracing::warn;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board_masks::{bit, contains, Bitboard};
use crate::game_state::jungle_types::*;
use crate::search::zobrist::ZobristKeys;

/// Opening placement as `(col, row, kind)` for Player One. Player Two's
/// placement is the point reflection through the board centre.
const PLAYER_ONE_SETUP: [(u8, u8, PieceKind); 8] = [
    (0, 8, PieceKind::Lion),
    (6, 8, PieceKind::Tiger),
    (1, 7, PieceKind::Dog),
    (5, 7, PieceKind::Cat),
    (4, 6, PieceKind::Wolf),
    (2, 6, PieceKind::Panther),
    (0, 6, PieceKind::Rat),
    (6, 6, PieceKind::Elephant),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    // [player][piece_kind]
    pub pieces: [[Bitboard; PIECE_KIND_COUNT]; 2],

    // Occupancy caches, recomputed from `pieces` after every mutation.
    pub occupancy_by_player: [Bitboard; 2],
    pub occupancy_all: Bitboard,

    /// `None` once the game has been decided.
    pub side_to_move: Option<Player>,

    pub zobrist_key: u64,
}

/// One entry of a game or search history: what the repetition rule compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub zobrist_key: u64,
    pub side_to_move: Option<Player>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            pieces: [[0; PIECE_KIND_COUNT]; 2],
            occupancy_by_player: [0; 2],
            occupancy_all: 0,
            side_to_move: Some(Player::One),
            zobrist_key: 0,
        }
    }
}

impl BoardState {
    /// Empty board with `side_to_move` set and a matching key.
    pub fn new_empty(keys: &ZobristKeys, side_to_move: Option<Player>) -> Self {
        let mut board = Self {
            side_to_move,
            ..Self::default()
        };
        board.zobrist_key = keys.compute_key(&board);
        board
    }

    /// Standard starting position, Player One to move.
    pub fn new_game(keys: &ZobristKeys) -> Self {
        let mut board = Self::new_empty(keys, None);
        for (col, row, kind) in PLAYER_ONE_SETUP {
            board.add_piece(keys, Player::One, kind, square_from_col_row(col, row));
            board.add_piece(
                keys,
                Player::Two,
                kind,
                square_from_col_row(BOARD_WIDTH - 1 - col, BOARD_HEIGHT - 1 - row),
            );
        }
        board.set_side_to_move(keys, Some(Player::One));
        board
    }

    /// Build a position from a piece list; used by tests and puzzle setups.
    pub fn from_pieces(
        keys: &ZobristKeys,
        placements: &[(Player, PieceKind, Square)],
        side_to_move: Option<Player>,
    ) -> Self {
        let mut board = Self::new_empty(keys, side_to_move);
        for &(player, kind, sq) in placements {
            board.add_piece(keys, player, kind, sq);
        }
        board
    }

    #[inline]
    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            zobrist_key: self.zobrist_key,
            side_to_move: self.side_to_move,
        }
    }

    /// Place a piece. Ignored with a warning if the square is off the board
    /// or already holds that exact piece, so the key is never toggled twice.
    pub fn add_piece(&mut self, keys: &ZobristKeys, player: Player, kind: PieceKind, sq: Square) {
        if sq >= NUM_SQUARES {
            warn!(sq, ?kind, ?player, "add_piece: square off the board");
            return;
        }
        let bb = &mut self.pieces[player.index()][kind.index()];
        if *bb & bit(sq) != 0 {
            warn!(sq, ?kind, ?player, "add_piece: piece already on square");
            return;
        }
        *bb |= bit(sq);
        keys.toggle_piece(&mut self.zobrist_key, player, kind, sq);
        self.recalc_occupancy();
    }

    /// Remove a piece if present.
    pub fn remove_piece(&mut self, keys: &ZobristKeys, player: Player, kind: PieceKind, sq: Square) {
        if sq >= NUM_SQUARES {
            warn!(sq, ?kind, ?player, "remove_piece: square off the board");
            return;
        }
        let bb = &mut self.pieces[player.index()][kind.index()];
        if *bb & bit(sq) != 0 {
            *bb &= !bit(sq);
            keys.toggle_piece(&mut self.zobrist_key, player, kind, sq);
        }
        self.recalc_occupancy();
    }

    /// Change the side to move, toggling the old side key out and the new one in.
    pub fn set_side_to_move(&mut self, keys: &ZobristKeys, side: Option<Player>) {
        keys.toggle_side(&mut self.zobrist_key, self.side_to_move);
        self.side_to_move = side;
        keys.toggle_side(&mut self.zobrist_key, self.side_to_move);
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Player, PieceKind)> {
        if !contains(self.occupancy_all, sq) {
            return None;
        }
        Player::BOTH.into_iter().find_map(|player| {
            self.piece_of(player, sq).map(|kind| (player, kind))
        })
    }

    pub fn piece_of(&self, player: Player, sq: Square) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| contains(self.pieces[player.index()][kind.index()], sq))
    }

    #[inline]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.occupancy_by_player[player.index()].count_ones()
    }

    pub fn recalc_occupancy(&mut self) {
        for player in Player::BOTH {
            self.occupancy_by_player[player.index()] = self.pieces[player.index()]
                .iter()
                .copied()
                .fold(0, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_player[0] | self.occupancy_by_player[1];
    }

    /// True when the occupancy caches equal the union of the piece bitboards.
    pub fn occupancy_is_consistent(&self) -> bool {
        let mut fresh = *self;
        fresh.recalc_occupancy();
        fresh.occupancy_by_player == self.occupancy_by_player
            && fresh.occupancy_all == self.occupancy_all
    }

    /// Recompute the key from scratch, discarding the incremental value.
    pub fn recalc_zobrist_key(&mut self, keys: &ZobristKeys) {
        self.zobrist_key = keys.compute_key(self);
    }

    /// Compare the incremental key with a from-scratch recomputation.
    pub fn check_zobrist_key(&self, keys: &ZobristKeys) -> EngineResult<()> {
        let recomputed = keys.compute_key(self);
        if recomputed == self.zobrist_key {
            Ok(())
        } else {
            Err(EngineError::HashDesync {
                incremental: self.zobrist_key,
                recomputed,
            })
        }
    }

    /// Detect and repair a desynchronised key. Returns whether a repair happened.
    pub fn verify_zobrist_key(&mut self, keys: &ZobristKeys) -> bool {
        match self.check_zobrist_key(keys) {
            Ok(()) => false,
            Err(err) => {
                warn!(%err, "recomputing board key");
                self.recalc_zobrist_key(keys);
                true
            }
        }
    }
}
