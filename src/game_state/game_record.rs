//! Authoritative game timeline: every position reached, a cursor into it, and
//! the result once the game is decided.
//!
//! Undo, redo and jumps only move the cursor. Playing a move from an earlier
//! position drops the redo tail and reports `history_diverged`, which tells
//! the caller that cached search results may belong to another line.

use tracing::info;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board_masks::target_den;
use crate::game_state::game_state::{BoardState, PositionKey};
use crate::game_state::jungle_types::{Player, Square};
use crate::move_generation::legal_move_apply::try_apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::zobrist::ZobristKeys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecordedState {
    board: BoardState,
    winner: Option<Player>,
}

/// What happened when a ply was added to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// `None` when a side with no legal moves conceded.
    pub mv: Option<Move>,
    pub winner: Option<Player>,
    pub history_diverged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    states: Vec<RecordedState>,
    cursor: usize,
}

/// The player who just moved wins by entering the enemy den or capturing the last enemy piece.
fn winner_after_move(board: &BoardState, mover: Player) -> Option<Player> {
    let mine = board.occupancy_by_player[mover.index()];
    let theirs = board.occupancy_by_player[mover.opposite().index()];
    (mine & target_den(mover) != 0 || theirs == 0).then_some(mover)
}

impl GameRecord {
    pub fn new(keys: &ZobristKeys) -> Self {
        Self::from_board(BoardState::new_game(keys))
    }

    pub fn from_board(board: BoardState) -> Self {
        Self {
            states: vec![RecordedState { board, winner: None }],
            cursor: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &BoardState {
        &self.states[self.cursor].board
    }

    /// Plies played to reach the current position.
    #[inline]
    pub fn ply(&self) -> usize {
        self.cursor
    }

    /// Positions recorded, including any redo tail.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.states[self.cursor].winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.current().side_to_move.is_none()
    }

    /// Positions strictly before the cursor, oldest first, as search expects its history.
    pub fn history_keys(&self) -> Vec<PositionKey> {
        self.states[..self.cursor]
            .iter()
            .map(|s| s.board.position_key())
            .collect()
    }

    pub fn legal_moves(&self, keys: &ZobristKeys) -> Vec<Move> {
        let board = self.current();
        legal_moves(board, board.side_to_move, &self.history_keys(), keys)
    }

    /// Legal moves of the piece on `square`, for highlighting destinations.
    pub fn legal_moves_from(&self, square: Square, keys: &ZobristKeys) -> EngineResult<Vec<Move>> {
        let board = self.current();
        let side = board.side_to_move.ok_or(EngineError::GameOver)?;
        if board.piece_of(side, square).is_none() {
            return Err(EngineError::EmptySquare { player: side, square });
        }
        Ok(self
            .legal_moves(keys)
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect())
    }

    fn push(&mut self, state: RecordedState) -> bool {
        let diverged = self.cursor + 1 < self.states.len();
        self.states.truncate(self.cursor + 1);
        self.states.push(state);
        self.cursor += 1;
        diverged
    }

    /// Validate and play `mv` from the current position.
    pub fn play(&mut self, mv: Move, keys: &ZobristKeys) -> EngineResult<PlayOutcome> {
        let board = *self.current();
        let mover = board.side_to_move.ok_or(EngineError::GameOver)?;
        if !self.legal_moves(keys).contains(&mv) {
            return Err(EngineError::IllegalMove(mv));
        }

        let mut next = try_apply_move(&board, mv, keys)?;
        let winner = winner_after_move(&next, mover);
        if winner.is_some() {
            next.set_side_to_move(keys, None);
            info!(?mover, %mv, "game decided");
        }

        let history_diverged = self.push(RecordedState { board: next, winner });
        Ok(PlayOutcome {
            mv: Some(mv),
            winner,
            history_diverged,
        })
    }

    /// End the game if the side to move has no legal moves; that side loses.
    ///
    /// Returns `Ok(None)` and records nothing when moves remain.
    pub fn declare_no_moves(&mut self, keys: &ZobristKeys) -> EngineResult<Option<PlayOutcome>> {
        let side = self.current().side_to_move.ok_or(EngineError::GameOver)?;
        if !self.legal_moves(keys).is_empty() {
            return Ok(None);
        }

        let mut next = *self.current();
        next.set_side_to_move(keys, None);
        let winner = Some(side.opposite());
        info!(loser = ?side, "no legal moves");

        let history_diverged = self.push(RecordedState { board: next, winner });
        Ok(Some(PlayOutcome {
            mv: None,
            winner,
            history_diverged,
        }))
    }

    pub fn undo(&mut self) -> EngineResult<()> {
        if self.cursor == 0 {
            return Err(EngineError::NothingToUndo);
        }
        self.cursor -= 1;
        Ok(())
    }

    pub fn redo(&mut self) -> EngineResult<()> {
        if self.cursor + 1 >= self.states.len() {
            return Err(EngineError::NothingToRedo);
        }
        self.cursor += 1;
        Ok(())
    }

    /// Move the cursor to `ply` within the recorded line.
    pub fn jump_to(&mut self, ply: usize) -> EngineResult<()> {
        if ply >= self.states.len() {
            return Err(EngineError::PlyOutOfRange {
                ply,
                len: self.states.len(),
            });
        }
        self.cursor = ply;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::jungle_types::{square_from_col_row, PieceKind};

    fn rat_step() -> Move {
        Move::quiet(square_from_col_row(0, 6), square_from_col_row(0, 5), PieceKind::Rat)
    }

    #[test]
    fn play_undo_redo_and_divergence() {
        let keys = ZobristKeys::new();
        let mut record = GameRecord::new(&keys);
        assert!(matches!(record.undo(), Err(EngineError::NothingToUndo)));

        let first = record.play(rat_step(), &keys).expect("legal opening move");
        assert!(!first.history_diverged);
        assert_eq!(record.ply(), 1);
        assert_eq!(record.history_keys().len(), 1);
        assert_eq!(record.current().side_to_move, Some(Player::Two));

        record.undo().expect("one ply to undo");
        assert_eq!(record.current(), &BoardState::new_game(&keys));
        record.redo().expect("one ply to redo");
        assert!(matches!(record.redo(), Err(EngineError::NothingToRedo)));

        record.jump_to(0).expect("start is recorded");
        let other = record.legal_moves(&keys)[1];
        assert_ne!(other, rat_step());
        let replay = record.play(other, &keys).expect("legal move");
        assert!(replay.history_diverged);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn jump_beyond_the_line_reports_the_range() {
        let keys = ZobristKeys::new();
        let mut record = GameRecord::new(&keys);
        record.play(rat_step(), &keys).expect("legal opening move");
        assert!(matches!(
            record.jump_to(2),
            Err(EngineError::PlyOutOfRange { ply: 2, len: 2 })
        ));
        assert_eq!(record.ply(), 1);
        record.jump_to(1).expect("last recorded ply");
    }

    #[test]
    fn illegal_moves_and_empty_squares_are_rejected() {
        let keys = ZobristKeys::new();
        let mut record = GameRecord::new(&keys);
        let two_squares = Move::quiet(square_from_col_row(0, 6), square_from_col_row(0, 4), PieceKind::Rat);
        assert!(matches!(record.play(two_squares, &keys), Err(EngineError::IllegalMove(_))));
        assert!(matches!(
            record.legal_moves_from(30, &keys),
            Err(EngineError::EmptySquare { .. })
        ));
        let rat_moves = record
            .legal_moves_from(square_from_col_row(0, 6), &keys)
            .expect("rat is on a7");
        assert_eq!(rat_moves.len(), 3);
    }

    #[test]
    fn den_entry_ends_the_game() {
        let keys = ZobristKeys::new();
        let rat = square_from_col_row(2, 0);
        let den = square_from_col_row(3, 0);
        let board = BoardState::from_pieces(
            &keys,
            &[
                (Player::One, PieceKind::Rat, rat),
                (Player::Two, PieceKind::Cat, square_from_col_row(6, 8)),
            ],
            Some(Player::One),
        );
        let mut record = GameRecord::from_board(board);
        let outcome = record
            .play(Move::quiet(rat, den, PieceKind::Rat), &keys)
            .expect("den entry is legal");
        assert_eq!(outcome.winner, Some(Player::One));
        assert!(record.is_over());
        assert_eq!(record.winner(), Some(Player::One));
        assert_eq!(record.current().zobrist_key, keys.compute_key(record.current()));
        assert!(matches!(record.play(rat_step(), &keys), Err(EngineError::GameOver)));

        record.undo().expect("undo past the end");
        assert_eq!(record.winner(), None);
        assert!(!record.is_over());
    }

    #[test]
    fn side_without_moves_concedes() {
        let keys = ZobristKeys::new();
        // Player One's elephant sits in the lake; its only exit holds a rat it may not capture.
        let stuck = square_from_col_row(1, 4);
        let exit = square_from_col_row(0, 4);
        let board = BoardState::from_pieces(
            &keys,
            &[
                (Player::One, PieceKind::Elephant, stuck),
                (Player::Two, PieceKind::Rat, exit),
            ],
            Some(Player::One),
        );
        let mut record = GameRecord::from_board(board);
        let outcome = record
            .declare_no_moves(&keys)
            .expect("game running")
            .expect("Player One is stuck");
        assert_eq!(outcome.winner, Some(Player::Two));
        assert_eq!(outcome.mv, None);
        assert!(record.is_over());

        let mut fresh = GameRecord::new(&keys);
        assert_eq!(fresh.declare_no_moves(&keys).expect("game running"), None);
        assert_eq!(fresh.len(), 1);
    }
}
