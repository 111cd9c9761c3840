//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a `GameRecord`,
//! with an optional seeded random opening prefix.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

use crate::engines::engine_trait::Engine;
use crate::errors::{EngineError, EngineResult};
use crate::game_state::board_masks::target_den;
use crate::game_state::game_record::GameRecord;
use crate::game_state::game_state::BoardState;
use crate::game_state::jungle_types::Player;
use crate::search::zobrist::ZobristKeys;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    DenEntry,
    Wipeout,
    NoMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win { winner: Player, reason: WinReason },
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSlot {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: BoardState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub player_one_move_count: u32,
    pub player_two_move_count: u32,
    pub player_one_total_time_ns: u128,
    pub player_two_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub first_wins: u16,
    pub second_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub first_total_time_ns: u128,
    pub second_total_time_ns: u128,
    pub first_moves: u32,
    pub second_moves: u32,
}

impl MatchSeriesStats {
    fn avg_ms(total_ns: u128, moves: u32) -> f64 {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} first_wins={} second_wins={} draws={} first_avg_ms={:.3} second_avg_ms={:.3}",
            self.games,
            self.first_wins,
            self.second_wins,
            self.draws,
            Self::avg_ms(self.first_total_time_ns, self.first_moves),
            Self::avg_ms(self.second_total_time_ns, self.second_moves),
        )
    }
}

fn win_reason(board: &BoardState, winner: Player) -> WinReason {
    if board.occupancy_by_player[winner.index()] & target_den(winner) != 0 {
        WinReason::DenEntry
    } else if board.occupancy_by_player[winner.opposite().index()] == 0 {
        WinReason::Wipeout
    } else {
        WinReason::NoMoves
    }
}

/// Play uniformly random legal moves for a seeded number of plies.
fn apply_seeded_random_opening(
    record: &mut GameRecord,
    keys: &ZobristKeys,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> EngineResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = rng.random_range(min_plies..=max_plies.max(min_plies));
    let mut played = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        let moves = record.legal_moves(keys);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let outcome = record.play(mv, keys)?;
        played.push(mv.to_string());
        if outcome.winner.is_some() {
            break;
        }
    }
    Ok(played)
}

/// Play one seeded match; `engine_one` moves for Player One.
pub fn play_engine_match(
    engine_one: &mut dyn Engine,
    engine_two: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    let keys = ZobristKeys::new();
    let mut record = GameRecord::new(&keys);
    let opening_moves = apply_seeded_random_opening(
        &mut record,
        &keys,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    play_engine_match_from_record(engine_one, engine_two, record, &keys, opening_moves, config)
}

/// Play from a caller-provided position without a random opening.
pub fn play_engine_match_from_state(
    engine_one: &mut dyn Engine,
    engine_two: &mut dyn Engine,
    start: BoardState,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    let keys = ZobristKeys::new();
    play_engine_match_from_record(
        engine_one,
        engine_two,
        GameRecord::from_board(start),
        &keys,
        Vec::new(),
        config,
    )
}

fn play_engine_match_from_record(
    engine_one: &mut dyn Engine,
    engine_two: &mut dyn Engine,
    mut record: GameRecord,
    keys: &ZobristKeys,
    opening_moves: Vec<String>,
    config: MatchConfig,
) -> EngineResult<MatchResult> {
    engine_one.new_game();
    engine_two.new_game();

    let mut played_moves = Vec::new();
    let mut move_counts = [0u32; 2];
    let mut total_time_ns = [0u128; 2];

    for _ in 0..config.max_plies {
        let Some(mover) = record.current().side_to_move else {
            break;
        };
        if record.declare_no_moves(keys)?.is_some() {
            break;
        }

        let history = record.history_keys();
        let engine: &mut dyn Engine = match mover {
            Player::One => &mut *engine_one,
            Player::Two => &mut *engine_two,
        };
        let started = Instant::now();
        let out = engine.choose_move(record.current(), &history)?;
        let elapsed_ns = started.elapsed().as_nanos();
        move_counts[mover.index()] = move_counts[mover.index()].saturating_add(1);
        total_time_ns[mover.index()] = total_time_ns[mover.index()].saturating_add(elapsed_ns);

        let chosen = out.best_move.ok_or(EngineError::GameOver)?;
        let outcome = record.play(chosen, keys)?;
        played_moves.push(chosen.to_string());
        if outcome.history_diverged {
            engine_one.history_diverged();
            engine_two.history_diverged();
        }
    }

    let final_state = *record.current();
    let outcome = match record.winner() {
        Some(winner) => MatchOutcome::Win {
            winner,
            reason: win_reason(&final_state, winner),
        },
        None => MatchOutcome::DrawMaxPlies,
    };

    Ok(MatchResult {
        outcome,
        final_state,
        opening_moves,
        played_moves,
        player_one_move_count: move_counts[Player::One.index()],
        player_two_move_count: move_counts[Player::Two.index()],
        player_one_total_time_ns: total_time_ns[Player::One.index()],
        player_two_total_time_ns: total_time_ns[Player::Two.index()],
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    first_factory: F1,
    second_factory: F2,
    config: MatchSeriesConfig,
) -> EngineResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let first_is_player_one = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut first = first_factory();
        let mut second = second_factory();

        let result = if first_is_player_one {
            play_engine_match(first.as_mut(), second.as_mut(), seed, config.per_game)?
        } else {
            play_engine_match(second.as_mut(), first.as_mut(), seed, config.per_game)?
        };

        let (first_side, second_side) = if first_is_player_one {
            (Player::One, Player::Two)
        } else {
            (Player::Two, Player::One)
        };
        let moves = [result.player_one_move_count, result.player_two_move_count];
        let times = [result.player_one_total_time_ns, result.player_two_total_time_ns];
        stats.first_moves = stats.first_moves.saturating_add(moves[first_side.index()]);
        stats.second_moves = stats.second_moves.saturating_add(moves[second_side.index()]);
        stats.first_total_time_ns = stats.first_total_time_ns.saturating_add(times[first_side.index()]);
        stats.second_total_time_ns = stats.second_total_time_ns.saturating_add(times[second_side.index()]);

        let winner_slot = match result.outcome {
            MatchOutcome::Win { winner, .. } if winner == first_side => Some(EngineSlot::First),
            MatchOutcome::Win { .. } => Some(EngineSlot::Second),
            MatchOutcome::DrawMaxPlies => None,
        };
        match winner_slot {
            Some(EngineSlot::First) => stats.first_wins += 1,
            Some(EngineSlot::Second) => stats.second_wins += 1,
            None => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        info!(
            game = i + 1,
            games = config.games,
            seed,
            first = first.name(),
            second = second.name(),
            outcome = ?result.outcome,
            plies = result.opening_moves.len() + result.played_moves.len(),
            "match finished"
        );
    }

    Ok(stats)
}
