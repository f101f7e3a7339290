//! hilo-core: Game rules, round state, statistics, and configuration.

pub mod chance;
pub mod config;
pub mod controller;
pub mod round;
pub mod stats;

pub use chance::SecretSource;
pub use config::{Config, ConfigError};
pub use controller::{GameController, DEFAULT_MAX_NUMBER};
pub use round::{attempt_budget, Direction, GuessOutcome, RoundStarted, RoundState};
pub use stats::{win_probability, AggregateStats, StatsSnapshot};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod chance_tests;
#[cfg(test)]
mod round_tests;
#[cfg(test)]
mod stats_tests;
