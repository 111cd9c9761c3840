//! Crate root module declarations for the Jungle engine.
//!
//! This file exposes the board model, move generation, search, engine
//! front-ends and utility helpers so binaries, tests, and benches can import
//! stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board_masks;
    pub mod game_record;
    pub mod game_state;
    pub mod jungle_types;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_leaper;
    pub mod legal_moves_rat;
    pub mod legal_moves_step;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod piece_square_tables;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_game_state;
}
