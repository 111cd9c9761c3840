//! Capture eligibility rules.
//!
//! Rank decides captures, with three exceptions: a defender standing on a
//! trap next to its opponent's den can be taken by anything, the rat beats
//! the elephant, and the elephant can never take the rat. On top of that the
//! rat only captures within its own terrain class (lake to lake, land to land).

use crate::game_state::board_masks::{contains, traps_weakening, LAKE_SQUARES};
use crate::game_state::jungle_types::*;

/// True when a defender of `defender_owner` on `to` sits in a weakening trap.
#[inline]
pub fn defender_is_trapped(defender_owner: Player, to: Square) -> bool {
    contains(traps_weakening(defender_owner), to)
}

/// Rank law with the rat/elephant overrides, ignoring traps and terrain.
#[inline]
pub fn outranks(attacker: PieceKind, defender: PieceKind) -> bool {
    match (attacker, defender) {
        (PieceKind::Elephant, PieceKind::Rat) => false,
        (PieceKind::Rat, PieceKind::Elephant) => true,
        _ => attacker.rank() >= defender.rank(),
    }
}

/// Whether `attacker` moving `from -> to` may capture `defender` owned by `defender_owner`.
pub fn can_capture(
    attacker: PieceKind,
    from: Square,
    defender: PieceKind,
    defender_owner: Player,
    to: Square,
) -> bool {
    let allowed = defender_is_trapped(defender_owner, to) || outranks(attacker, defender);
    if !allowed {
        return false;
    }
    if attacker == PieceKind::Rat {
        return contains(LAKE_SQUARES, from) == contains(LAKE_SQUARES, to);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND_A: Square = square_from_col_row(0, 4);
    const LAND_B: Square = square_from_col_row(0, 5);
    const LAKE_A: Square = square_from_col_row(1, 4);
    const LAKE_B: Square = square_from_col_row(2, 4);

    #[test]
    fn rank_law_holds_off_traps() {
        for attacker in ALL_PIECE_KINDS {
            for defender in ALL_PIECE_KINDS {
                let expected = match (attacker, defender) {
                    (PieceKind::Rat, PieceKind::Elephant) => true,
                    (PieceKind::Elephant, PieceKind::Rat) => false,
                    _ => attacker.rank() >= defender.rank(),
                };
                assert_eq!(
                    can_capture(attacker, LAND_A, defender, Player::Two, LAND_B),
                    expected,
                    "{attacker:?} x {defender:?}"
                );
            }
        }
    }

    #[test]
    fn traps_ignore_rank() {
        // d2 guards Player Two's own den, so it does not weaken Player Two.
        let own_trap = square_from_col_row(3, 1);
        assert!(!can_capture(PieceKind::Cat, square_from_col_row(3, 2), PieceKind::Lion, Player::Two, own_trap));
        // d8 sits next to Player One's den and weakens Player Two's pieces.
        let enemy_trap = square_from_col_row(3, 7);
        for attacker in ALL_PIECE_KINDS {
            for defender in ALL_PIECE_KINDS {
                assert!(can_capture(attacker, square_from_col_row(3, 6), defender, Player::Two, enemy_trap));
            }
        }
    }

    #[test]
    fn rat_never_captures_across_the_shore() {
        assert!(!can_capture(PieceKind::Rat, LAKE_A, PieceKind::Elephant, Player::One, LAND_A));
        assert!(!can_capture(PieceKind::Rat, LAND_A, PieceKind::Rat, Player::One, LAKE_A));
        assert!(can_capture(PieceKind::Rat, LAKE_A, PieceKind::Rat, Player::One, LAKE_B));
        assert!(can_capture(PieceKind::Rat, LAND_A, PieceKind::Elephant, Player::One, LAND_B));
    }
}
