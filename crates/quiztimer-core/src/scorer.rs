//! Answer checking and score keeping.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts correct answers for one question set.
///
/// The interaction loop is the only writer. The counter is atomic so the
/// session coordinator can read a snapshot at timeout while the loop is
/// still parked on a read.
#[derive(Debug)]
pub struct Scorer {
    correct: AtomicUsize,
    total: usize,
}

impl Scorer {
    /// Create a scorer for a set of `total` questions.
    pub fn new(total: usize) -> Self {
        Self {
            correct: AtomicUsize::new(0),
            total,
        }
    }

    /// Compare a response with the expected answer and count it if it
    /// matches.
    ///
    /// Both sides are trimmed of surrounding whitespace; the rest must match
    /// exactly (case-sensitive, no numeric tolerance). Returns whether the
    /// answer was correct.
    pub fn record_answer(&self, input: &str, expected: &str) -> bool {
        let correct = input.trim() == expected.trim();
        if correct {
            let previous = self.correct.fetch_add(1, Ordering::AcqRel);
            debug_assert!(previous < self.total, "more correct answers than questions");
        }
        correct
    }

    /// Current `(correct, total)` counts.
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            correct: self.correct.load(Ordering::Acquire),
            total: self.total,
        }
    }
}

/// A point-in-time copy of a [`Scorer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub correct: usize,
    pub total: usize,
}

impl ScoreSnapshot {
    /// Percentage of correct answers, truncated toward zero.
    pub fn percent(&self) -> usize {
        (self.correct * 100).checked_div(self.total).unwrap_or(0)
    }
}

impl fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} of the questions were correctly answered. Your score is {}",
            self.correct,
            self.total,
            self.percent()
        )
    }
}
