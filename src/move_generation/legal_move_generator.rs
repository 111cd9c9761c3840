//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise target generation, resolves captures against the
//! rank and trap rules, then filters out any move that would produce the
//! third occurrence of a position (same key, same side to move) in the
//! supplied history.

use crate::game_state::board_masks::{own_den, squares, Bitboard};
use crate::game_state::game_state::{BoardState, PositionKey};
use crate::game_state::jungle_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::can_capture;
use crate::move_generation::legal_moves_leaper::leaper_jump_targets;
use crate::move_generation::legal_moves_rat::rat_step_targets;
use crate::move_generation::legal_moves_step::orthogonal_step_targets;
use crate::moves::move_descriptions::Move;
use crate::search::zobrist::ZobristKeys;

/// A move producing a position already seen this many times is illegal.
pub const REPETITION_LIMIT: usize = 2;

/// Destination squares for one piece before capture resolution.
pub fn piece_targets(board: &BoardState, side: Player, kind: PieceKind, from: Square) -> Bitboard {
    let friendly = board.occupancy_by_player[side.index()];
    let den = own_den(side);
    match kind {
        PieceKind::Rat => rat_step_targets(from, friendly, den),
        PieceKind::Tiger | PieceKind::Lion => {
            let all_rats = board.pieces[Player::One.index()][PieceKind::Rat.index()]
                | board.pieces[Player::Two.index()][PieceKind::Rat.index()];
            orthogonal_step_targets(from, friendly, den)
                | leaper_jump_targets(from, friendly, all_rats, den)
        }
        PieceKind::Cat | PieceKind::Dog | PieceKind::Wolf | PieceKind::Panther | PieceKind::Elephant => {
            orthogonal_step_targets(from, friendly, den)
        }
    }
}

/// Every rules-legal move for `side`, ignoring repetition.
pub fn generate_pseudo_legal_moves(board: &BoardState, side: Player, out: &mut Vec<Move>) {
    let enemy = side.opposite();
    for kind in ALL_PIECE_KINDS {
        for from in squares(board.pieces[side.index()][kind.index()]) {
            for to in squares(piece_targets(board, side, kind, from)) {
                match board.piece_of(enemy, to) {
                    None => out.push(Move::quiet(from, to, kind)),
                    Some(defender) if can_capture(kind, from, defender, enemy, to) => {
                        out.push(Move::capture(from, to, kind, defender));
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

/// How often `key` already occurs in `history`.
#[inline]
pub fn repetition_count(history: &[PositionKey], key: PositionKey) -> usize {
    history.iter().filter(|&&seen| seen == key).count()
}

/// Legal moves for `side`, excluding moves that would repeat a position a third time.
///
/// `history` lists the positions reached before `board`. A `None` side has no moves.
pub fn legal_moves(
    board: &BoardState,
    side: Option<Player>,
    history: &[PositionKey],
    keys: &ZobristKeys,
) -> Vec<Move> {
    let Some(side) = side else {
        return Vec::new();
    };

    let mut pseudo = Vec::with_capacity(32);
    generate_pseudo_legal_moves(board, side, &mut pseudo);
    if history.is_empty() {
        return pseudo;
    }

    pseudo
        .into_iter()
        .filter(|&mv| {
            let next = apply_move(board, mv, keys);
            repetition_count(history, next.position_key()) < REPETITION_LIMIT
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_masks::{contains, LAKE_SQUARES};

    fn keys() -> ZobristKeys {
        ZobristKeys::new()
    }

    #[test]
    fn start_position_move_counts() {
        let keys = keys();
        let board = BoardState::new_game(&keys);
        let one = legal_moves(&board, Some(Player::One), &[], &keys);
        let two = legal_moves(&board, Some(Player::Two), &[], &keys);
        assert_eq!(one.len(), 24);
        assert_eq!(two.len(), 24);
        assert!(one.iter().any(|m| m.moved == PieceKind::Rat));
        assert!(one.iter().all(|m| !m.is_capture()));
        assert!(legal_moves(&board, None, &[], &keys).is_empty());
    }

    #[test]
    fn trap_capture_ignores_rank_only_on_the_trap() {
        let keys = keys();
        // Player Two's lion on d8, a trap next to Player One's den; Player One's cat on c8.
        let trap = square_from_col_row(3, 7);
        let cat_sq = square_from_col_row(2, 7);
        let trapped = BoardState::from_pieces(
            &keys,
            &[
                (Player::One, PieceKind::Cat, cat_sq),
                (Player::Two, PieceKind::Lion, trap),
            ],
            Some(Player::One),
        );
        let moves = legal_moves(&trapped, Some(Player::One), &[], &keys);
        assert!(moves.contains(&Move::capture(cat_sq, trap, PieceKind::Cat, PieceKind::Lion)));

        // Same attacker and defender one square away from the trap.
        let open = square_from_col_row(2, 6);
        let cat_open = square_from_col_row(1, 6);
        let untrapped = BoardState::from_pieces(
            &keys,
            &[
                (Player::One, PieceKind::Cat, cat_open),
                (Player::Two, PieceKind::Lion, open),
            ],
            Some(Player::One),
        );
        let moves = legal_moves(&untrapped, Some(Player::One), &[], &keys);
        assert!(moves.iter().all(|m| m.to != open));
    }

    #[test]
    fn rat_beats_elephant_but_not_from_the_water() {
        let keys = keys();
        let rat_land = square_from_col_row(0, 4);
        let rat_lake = square_from_col_row(1, 3);
        let elephant = square_from_col_row(0, 3);
        for (rat_sq, expect_capture) in [(rat_land, true), (rat_lake, false)] {
            let board = BoardState::from_pieces(
                &keys,
                &[
                    (Player::One, PieceKind::Rat, rat_sq),
                    (Player::Two, PieceKind::Elephant, elephant),
                ],
                Some(Player::One),
            );
            let moves = legal_moves(&board, Some(Player::One), &[], &keys);
            let captures = moves.iter().any(|m| m.captured == Some(PieceKind::Elephant));
            assert_eq!(captures, expect_capture, "rat on {rat_sq}");
        }
    }

    #[test]
    fn elephant_cannot_take_the_rat() {
        let keys = keys();
        let board = BoardState::from_pieces(
            &keys,
            &[
                (Player::One, PieceKind::Elephant, square_from_col_row(3, 4)),
                (Player::Two, PieceKind::Rat, square_from_col_row(3, 3)),
            ],
            Some(Player::One),
        );
        let moves = legal_moves(&board, Some(Player::One), &[], &keys);
        assert!(moves.iter().all(|m| !m.is_capture()));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn lake_jump_captures_by_rank_on_landing() {
        let keys = keys();
        let lion = square_from_col_row(0, 4);
        let landing = square_from_col_row(3, 4);
        for (defender, expect_capture) in [(PieceKind::Tiger, true), (PieceKind::Elephant, false)] {
            let board = BoardState::from_pieces(
                &keys,
                &[
                    (Player::One, PieceKind::Lion, lion),
                    (Player::Two, defender, landing),
                ],
                Some(Player::One),
            );
            let onto_landing: Vec<Move> = legal_moves(&board, Some(Player::One), &[], &keys)
                .into_iter()
                .filter(|m| m.to == landing)
                .collect();
            let expected = if expect_capture {
                vec![Move::capture(lion, landing, PieceKind::Lion, defender)]
            } else {
                Vec::new()
            };
            assert_eq!(onto_landing, expected, "{defender:?} on d5");
        }
    }

    #[test]
    fn only_the_rat_enters_the_lake() {
        let keys = keys();
        let mut board = BoardState::new_game(&keys);
        let mut history = Vec::new();
        for _ in 0..12 {
            let side = board.side_to_move;
            let moves = legal_moves(&board, side, &history, &keys);
            for mv in &moves {
                if contains(LAKE_SQUARES, mv.to) {
                    assert_eq!(mv.moved, PieceKind::Rat);
                }
            }
            let Some(&mv) = moves.first() else { break };
            history.push(board.position_key());
            board = apply_move(&board, mv, &keys);
        }
    }

    #[test]
    fn third_repetition_is_filtered_out() {
        let keys = keys();
        let a = square_from_col_row(0, 0);
        let b = square_from_col_row(1, 0);
        let board = BoardState::from_pieces(
            &keys,
            &[
                (Player::One, PieceKind::Dog, a),
                (Player::Two, PieceKind::Dog, square_from_col_row(6, 8)),
            ],
            Some(Player::One),
        );
        let step = Move::quiet(a, b, PieceKind::Dog);
        let after = apply_move(&board, step, &keys);

        let once = vec![after.position_key()];
        assert!(legal_moves(&board, Some(Player::One), &once, &keys).contains(&step));

        let twice = vec![after.position_key(), board.position_key(), after.position_key()];
        let moves = legal_moves(&board, Some(Player::One), &twice, &keys);
        assert!(!moves.contains(&step));
        for mv in &moves {
            let next = apply_move(&board, *mv, &keys);
            assert!(repetition_count(&twice, next.position_key()) < REPETITION_LIMIT);
        }
    }
}
