//! Move description type.
//!
//! A move records origin, destination, the kind that moved and the kind it
//! captured. Two moves are equal only when all four fields match, which is
//! what transposition-table move ordering relies on. "No move" is expressed
//! as `Option<Move>::None` rather than a sentinel square.

use std::fmt;

use crate::game_state::jungle_types::{square_to_algebraic, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: PieceKind,
    pub captured: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square, moved: PieceKind) -> Self {
        Self {
            from,
            to,
            moved,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, moved: PieceKind, captured: PieceKind) -> Self {
        Self {
            from,
            to,
            moved,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// `a7-a6 (R)` for a quiet move, `c3xc4 (E)` for a capture.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} ({})",
            square_to_algebraic(self.from),
            if self.is_capture() { 'x' } else { '-' },
            square_to_algebraic(self.to),
            self.moved.symbol()
        )
    }
}

pub fn format_optional_move(mv: Option<Move>) -> String {
    mv.map_or_else(|| "NullMove".to_owned(), |m| m.to_string())
}
