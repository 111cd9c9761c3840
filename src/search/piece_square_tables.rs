//! Piece-square bonus tables consulted by the evaluator.
//!
//! The numbers are a tuning artifact; the evaluator only needs a bonus per
//! (player, kind, square). Two built-in presets exist and callers may supply
//! their own tables.

use serde::{Deserialize, Serialize};

use crate::game_state::jungle_types::*;

pub type SquareTable = [i32; NUM_SQUARES as usize];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PstPreset {
    /// All zeros: pure material evaluation.
    Zeroed,
    /// Bonus for standing closer to the opponent's den.
    #[default]
    DenApproach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSquareTables {
    tables: [[SquareTable; PIECE_KIND_COUNT]; 2],
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self::from_preset(PstPreset::default())
    }
}

impl PieceSquareTables {
    pub fn from_preset(preset: PstPreset) -> Self {
        match preset {
            PstPreset::Zeroed => Self::zeroed(),
            PstPreset::DenApproach => Self::den_approach(),
        }
    }

    pub fn zeroed() -> Self {
        Self {
            tables: [[[0; NUM_SQUARES as usize]; PIECE_KIND_COUNT]; 2],
        }
    }

    /// Caller-supplied tables, indexed `[player][kind][square]`.
    pub fn from_tables(tables: [[SquareTable; PIECE_KIND_COUNT]; 2]) -> Self {
        Self { tables }
    }

    pub fn den_approach() -> Self {
        let mut out = Self::zeroed();
        for player in Player::BOTH {
            // Player One attacks d1, Player Two attacks d9.
            let (den_col, den_row) = match player {
                Player::One => (3i32, 0i32),
                Player::Two => (3i32, (BOARD_HEIGHT - 1) as i32),
            };
            for kind in ALL_PIECE_KINDS {
                let weight = approach_weight(kind);
                for sq in 0..NUM_SQUARES {
                    let (col, row) = col_row_of(sq);
                    let distance = (col as i32 - den_col).abs() + (row as i32 - den_row).abs();
                    out.tables[player.index()][kind.index()][sq as usize] = (11 - distance) * weight;
                }
            }
        }
        out
    }

    #[inline]
    pub fn bonus(&self, player: Player, kind: PieceKind, square: Square) -> i32 {
        self.tables[player.index()][kind.index()][square as usize]
    }
}

fn approach_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Rat => 12,
        PieceKind::Cat | PieceKind::Dog => 6,
        PieceKind::Wolf | PieceKind::Panther => 8,
        PieceKind::Tiger | PieceKind::Lion => 15,
        PieceKind::Elephant => 10,
    }
}
