//! Core data model types for quiztimer.
//!
//! A quiz is a [`QuestionSet`]: question/answer pairs put into a random
//! order once, before the session starts, and never reordered after.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::QuizError;

/// A single question and the answer expected for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionAnswerPair {
    prompt: String,
    expected_answer: String,
}

impl QuestionAnswerPair {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// The question text shown to the user.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The answer a response is compared against.
    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }
}

/// An ordered, non-empty sequence of questions for one session.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    pairs: Vec<QuestionAnswerPair>,
}

impl QuestionSet {
    /// Shuffle `pairs` with the thread-local RNG.
    ///
    /// The thread RNG is seeded from OS entropy, so the order differs
    /// between runs.
    pub fn shuffled(pairs: Vec<QuestionAnswerPair>) -> Result<Self, QuizError> {
        Self::shuffled_with(pairs, &mut rand::rng())
    }

    /// Shuffle `pairs` with an RNG seeded from `seed`, giving the same
    /// order for the same input every time.
    pub fn shuffled_with_seed(
        pairs: Vec<QuestionAnswerPair>,
        seed: u64,
    ) -> Result<Self, QuizError> {
        Self::shuffled_with(pairs, &mut StdRng::seed_from_u64(seed))
    }

    /// Shuffle `pairs` with the given RNG (Fisher-Yates, uniform).
    ///
    /// Fails with [`QuizError::EmptyQuestionSet`] when `pairs` is empty.
    pub fn shuffled_with<R: Rng + ?Sized>(
        mut pairs: Vec<QuestionAnswerPair>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if pairs.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        pairs.shuffle(rng);
        Ok(Self { pairs })
    }

    /// Keep `pairs` in their given order.
    pub fn in_order(pairs: Vec<QuestionAnswerPair>) -> Result<Self, QuizError> {
        if pairs.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self { pairs })
    }

    /// Number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionAnswerPair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionAnswerPair;
    type IntoIter = std::slice::Iter<'a, QuestionAnswerPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
