//! CLI command implementations.

pub mod bench;
pub mod graph;
pub mod sort;
pub mod tree;

use algoviz_engine::{Config, Session};

/// Builds a session seeded from the command line.
fn session(seed: Option<u64>) -> anyhow::Result<Session> {
    let mut config = Config::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(Session::with_config(config)?)
}
