//! Plain-text board renderer.
//!
//! Creates a human-readable board view from internal bitboards for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::board_masks::{
    contains, Bitboard, DEN_PLAYER_ONE, DEN_PLAYER_TWO, LAKE_SQUARES, TRAPS_NEAR_PLAYER_ONE_DEN,
    TRAPS_NEAR_PLAYER_TWO_DEN,
};
use crate::game_state::game_state::BoardState;
use crate::game_state::jungle_types::*;

const FILE_LABELS: &str = "  a b c d e f g";

/// Render the board with row 9 at the top.
///
/// Player One's pieces are upper case, Player Two's lower case. Empty squares
/// show terrain: `~` lake, `#` trap, `@` den, `.` land.
pub fn render_game_state(board: &BoardState) -> String {
    render_with(|sq| match board.piece_at(sq) {
        Some((Player::One, kind)) => kind.symbol(),
        Some((Player::Two, kind)) => kind.symbol().to_ascii_lowercase(),
        None => terrain_char(sq),
    })
}

/// Render a mask as `x` for set squares and `.` otherwise.
pub fn render_bitboard(mask: Bitboard) -> String {
    render_with(|sq| if contains(mask, sq) { 'x' } else { '.' })
}

fn terrain_char(sq: Square) -> char {
    if contains(LAKE_SQUARES, sq) {
        '~'
    } else if contains(DEN_PLAYER_ONE | DEN_PLAYER_TWO, sq) {
        '@'
    } else if contains(TRAPS_NEAR_PLAYER_ONE_DEN | TRAPS_NEAR_PLAYER_TWO_DEN, sq) {
        '#'
    } else {
        '.'
    }
}

fn render_with(cell: impl Fn(Square) -> char) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in (0..BOARD_HEIGHT).rev() {
        out.push(char::from(b'1' + row));
        for col in 0..BOARD_WIDTH {
            out.push(' ');
            out.push(cell(square_from_col_row(col, row)));
        }
        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}
