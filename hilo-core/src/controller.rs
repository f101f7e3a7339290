//! Game-state controller: the single place that mutates round state.

use crate::chance::SecretSource;
use crate::round::{attempt_budget, Direction, GuessOutcome, RoundStarted, RoundState};
use crate::stats::{win_probability, AggregateStats, StatsSnapshot};

/// Upper bound used when configuration input is missing or unparseable.
pub const DEFAULT_MAX_NUMBER: u32 = 100;

/// Owns the active round, the aggregate counters, and the secret source.
///
/// One instance per game session; the presentation layer holds it and
/// drives it call by call. Every operation runs to completion and returns
/// a structured result instead of raising.
pub struct GameController {
    secrets: SecretSource,
    round: Option<RoundState>,
    stats: AggregateStats,
    /// Candidate upper bound for the next round; drives the probability
    /// display even before a round starts.
    max_number: u32,
}

impl GameController {
    pub fn new(secrets: SecretSource) -> Self {
        Self::with_default_max(secrets, DEFAULT_MAX_NUMBER)
    }

    /// `default_max` seeds the candidate bound (typically from config)
    /// before the player edits anything.
    pub fn with_default_max(secrets: SecretSource, default_max: u32) -> Self {
        Self {
            secrets,
            round: None,
            stats: AggregateStats::default(),
            max_number: default_max.max(1),
        }
    }

    /// The round in effect, terminal rounds included until `reset`.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn is_round_active(&self) -> bool {
        self.round.map_or(false, |r| r.is_active)
    }

    /// Parse a candidate upper bound and return its single-guess win
    /// probability, for live feedback before a round starts.
    ///
    /// Invalid input silently falls back to the default bound and the
    /// result is floored at 1; round state is never touched.
    pub fn preview_probability(&mut self, raw: &str) -> f64 {
        self.max_number = parse_max(raw);
        win_probability(self.max_number)
    }

    /// Start a fresh round, replacing any previous one.
    pub fn start_round(&mut self, raw_max: &str) -> RoundStarted {
        let max_number = parse_max(raw_max);
        self.max_number = max_number;
        let max_attempts = attempt_budget(max_number);
        let secret_number = self.secrets.draw(max_number);
        self.round = Some(RoundState {
            secret_number,
            max_number,
            max_attempts,
            attempts_used: 0,
            is_active: true,
        });
        RoundStarted {
            max_number,
            max_attempts,
        }
    }

    /// Submit one guess against the active round.
    ///
    /// Invalid input consumes no attempt and leaves the round active; with
    /// no active round the call is a no-op.
    pub fn submit_guess(&mut self, raw_guess: &str) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::Inactive;
        };
        if !round.is_active {
            return GuessOutcome::Inactive;
        }

        let guess = match raw_guess.trim().parse::<i64>() {
            Ok(g) if (0..=i64::from(round.max_number)).contains(&g) => g as u32,
            _ => {
                return GuessOutcome::Invalid {
                    message: format!(
                        "enter a valid number between 0 and {}",
                        round.max_number
                    ),
                };
            }
        };

        round.attempts_used += 1;
        let remaining = round.max_attempts - round.attempts_used;

        if guess == round.secret_number {
            round.is_active = false;
            self.stats.record_round(true);
            GuessOutcome::Win {
                attempts_used: round.attempts_used,
                secret_number: round.secret_number,
            }
        } else if remaining == 0 {
            round.is_active = false;
            self.stats.record_round(false);
            GuessOutcome::Loss {
                secret_number: round.secret_number,
            }
        } else {
            let direction = if guess < round.secret_number {
                Direction::Higher
            } else {
                Direction::Lower
            };
            GuessOutcome::Continue {
                direction,
                remaining,
            }
        }
    }

    /// Clear the round display state. Aggregate counters are untouched and
    /// the call is valid whether or not a round has ended.
    pub fn reset(&mut self) {
        self.round = None;
    }

    /// Counters plus derived values, recomputed on demand.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            games_played: self.stats.games_played,
            wins: self.stats.wins,
            win_rate: self.stats.win_rate(),
            win_probability: win_probability(self.max_number),
        }
    }
}

/// Invalid/missing input falls back to the default bound; the result is
/// floored at 1.
fn parse_max(raw: &str) -> u32 {
    let parsed = raw
        .trim()
        .parse::<i64>()
        .unwrap_or(i64::from(DEFAULT_MAX_NUMBER));
    parsed.clamp(1, i64::from(u32::MAX)) as u32
}
