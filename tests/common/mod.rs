//! Shared test setup.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use pair_match::{CardId, Column, GameConfig, MatchGame};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Philosophy game with a fixed seed.
pub fn seeded_game(seed: u64) -> MatchGame {
    init_logging();
    MatchGame::new(GameConfig::default().with_seed(seed)).expect("default config is valid")
}

pub fn left(index: usize) -> CardId {
    CardId::new(Column::Left, index)
}

/// Right-column card carrying `key`.
pub fn right_with_key(game: &MatchGame, key: &str) -> CardId {
    game.session()
        .right_column()
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.id.clone())
        .expect("every key has a right card")
}

/// Left-column card carrying `key`.
pub fn left_with_key(game: &MatchGame, key: &str) -> CardId {
    game.session()
        .left_column()
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.id.clone())
        .expect("every key has a left card")
}
