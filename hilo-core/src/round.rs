//! Round state and guess outcomes for a single hi-lo round.

/// Attempt budget by range size: small ranges get 5 guesses, very large
/// ranges 10, everything in between 7.
pub fn attempt_budget(max_number: u32) -> u32 {
    if max_number <= 50 {
        5
    } else if max_number > 1000 {
        10
    } else {
        7
    }
}

/// Hint attached to a wrong-but-valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The secret is above the guess.
    Higher,
    /// The secret is below the guess.
    Lower,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Higher => "higher",
            Direction::Lower => "lower",
        }
    }
}

/// One live round.
///
/// `secret_number`, `max_number`, and `max_attempts` are fixed at round
/// start; only `attempts_used` and `is_active` move afterwards. The struct
/// stays inspectable after a terminal outcome so the result display can
/// still read the final values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    /// Secret in `[0, max_number]`, inclusive both ends.
    pub secret_number: u32,
    /// Upper bound, >= 1.
    pub max_number: u32,
    pub max_attempts: u32,
    /// Valid guesses consumed so far; never exceeds `max_attempts`.
    pub attempts_used: u32,
    pub is_active: bool,
}

/// Signal emitted when a round starts, for the presentation layer to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted {
    pub max_number: u32,
    pub max_attempts: u32,
}

/// Outcome of submitting one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No round is active; the guess was ignored.
    Inactive,
    /// Input did not parse or was out of range. No attempt is consumed and
    /// the round stays active.
    Invalid { message: String },
    /// Wrong guess with attempts to spare.
    Continue { direction: Direction, remaining: u32 },
    /// Correct guess; the round is over.
    Win { attempts_used: u32, secret_number: u32 },
    /// Budget exhausted without hitting the secret; the round is over.
    Loss { secret_number: u32 },
}
