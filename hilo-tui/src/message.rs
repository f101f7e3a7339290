//! Sentence composition from structured guess outcomes.
//!
//! All grammar lives here: the controller reports what happened, the UI
//! decides how to say it.

use hilo_core::round::GuessOutcome;

/// Visual weight of a result message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Compose the user-facing message for an outcome.
///
/// `guess` is the raw text the player submitted; the continue hint quotes
/// it back ("higher than 42").
pub fn outcome_message(outcome: &GuessOutcome, guess: &str) -> (String, Severity) {
    match outcome {
        GuessOutcome::Inactive => (
            "No round in progress. Start a game first.".to_string(),
            Severity::Info,
        ),
        GuessOutcome::Invalid { message } => (format!("Please {message}"), Severity::Warning),
        GuessOutcome::Continue {
            direction,
            remaining,
        } => (
            format!(
                "Try again! The number is {} than {}. {} {} left",
                direction.as_str(),
                guess.trim(),
                remaining,
                plural(*remaining, "attempt", "attempts"),
            ),
            Severity::Warning,
        ),
        GuessOutcome::Win {
            attempts_used,
            secret_number,
        } => (
            format!(
                "You won in {} {}! The number was {}.",
                attempts_used,
                plural(*attempts_used, "guess", "guesses"),
                secret_number,
            ),
            Severity::Success,
        ),
        GuessOutcome::Loss { secret_number } => (
            format!(
                "Game over! The number was {}. Better luck next time!",
                secret_number,
            ),
            Severity::Error,
        ),
    }
}

fn plural<'a>(n: u32, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
