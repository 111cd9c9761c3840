//! Player, piece and square types shared by every subsystem.

/// One of the two sides. Player One starts at the top (row 9) and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Piece kind (owner is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Rat,
    Cat,
    Dog,
    Wolf,
    Panther,
    Tiger,
    Lion,
    Elephant,
}

pub const ALL_PIECE_KINDS: [PieceKind; 8] = [
    PieceKind::Rat,
    PieceKind::Cat,
    PieceKind::Dog,
    PieceKind::Wolf,
    PieceKind::Panther,
    PieceKind::Tiger,
    PieceKind::Lion,
    PieceKind::Elephant,
];

pub const PIECE_KIND_COUNT: usize = ALL_PIECE_KINDS.len();

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Rat => 0,
            PieceKind::Cat => 1,
            PieceKind::Dog => 2,
            PieceKind::Wolf => 3,
            PieceKind::Panther => 4,
            PieceKind::Tiger => 5,
            PieceKind::Lion => 6,
            PieceKind::Elephant => 7,
        }
    }

    /// Capture rank, 1 (rat) through 8 (elephant).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Material value used by the evaluator; distinct from capture rank.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Rat => 6500,
            PieceKind::Cat => 2000,
            PieceKind::Dog => 3000,
            PieceKind::Wolf => 4000,
            PieceKind::Panther => 5000,
            PieceKind::Tiger => 7500,
            PieceKind::Lion => 8500,
            PieceKind::Elephant => 9000,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Rat => 'R',
            PieceKind::Cat => 'C',
            PieceKind::Dog => 'D',
            PieceKind::Wolf => 'W',
            PieceKind::Panther => 'P',
            PieceKind::Tiger => 'T',
            PieceKind::Lion => 'L',
            PieceKind::Elephant => 'E',
        }
    }

    /// Lion and tiger may jump the lake.
    #[inline]
    pub const fn is_leaper(self) -> bool {
        matches!(self, PieceKind::Tiger | PieceKind::Lion)
    }
}

/// Board square index (`0..=62`), `row * 7 + col`.
pub type Square = u8;

pub const BOARD_WIDTH: u8 = 7;
pub const BOARD_HEIGHT: u8 = 9;
pub const NUM_SQUARES: u8 = BOARD_WIDTH * BOARD_HEIGHT;

#[inline]
pub const fn square_from_col_row(col: u8, row: u8) -> Square {
    row * BOARD_WIDTH + col
}

#[inline]
pub const fn col_row_of(square: Square) -> (u8, u8) {
    (square % BOARD_WIDTH, square / BOARD_WIDTH)
}

/// `"a1"` for square 0 through `"g9"` for square 62; `"??"` off the board.
pub fn square_to_algebraic(square: Square) -> String {
    if square >= NUM_SQUARES {
        return "??".to_owned();
    }
    let (col, row) = col_row_of(square);
    let mut out = String::with_capacity(2);
    out.push(char::from(b'a' + col));
    out.push(char::from(b'1' + row));
    out
}
