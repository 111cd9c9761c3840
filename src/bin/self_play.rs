//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- jungle.toml`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use jungle_engine::config::EngineConfig;
use jungle_engine::engines::engine_alpha_beta::AlphaBetaEngine;
use jungle_engine::engines::engine_random::RandomEngine;
use jungle_engine::engines::engine_trait::Engine;
use jungle_engine::errors::EngineResult;
use jungle_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };
    info!(?config, "engine configuration");

    let searcher = {
        let config = config.clone();
        move || Box::new(AlphaBetaEngine::new(&config)) as Box<dyn Engine>
    };
    let baseline = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        searcher,
        baseline,
        MatchSeriesConfig {
            games: 4,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
