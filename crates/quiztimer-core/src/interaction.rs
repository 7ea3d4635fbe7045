//! The interaction loop: ask each question, block for a line, score it.
//!
//! Reads block, so the loop runs on its own OS thread outside the async
//! runtime. A thread parked on a read when the deadline fires is left
//! behind and dies with the process.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread;

use tokio::sync::oneshot;

use crate::error::QuizError;
use crate::model::{QuestionAnswerPair, QuestionSet};
use crate::scorer::Scorer;

/// What happened to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// No line could be read (end of input, read error, invalid UTF-8).
    Unanswered,
}

/// Sequentially presents a [`QuestionSet`] on `output` and scores lines
/// read from `input`.
pub struct InteractionLoop<R, W> {
    questions: QuestionSet,
    scorer: Arc<Scorer>,
    input: R,
    output: W,
}

impl<R, W> InteractionLoop<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(questions: QuestionSet, scorer: Arc<Scorer>, input: R, output: W) -> Self {
        Self {
            questions,
            scorer,
            input,
            output,
        }
    }

    /// Ask every question in order and return once the last one is done.
    ///
    /// End of input does not stop the loop; each remaining question is
    /// still shown and counts as unanswered.
    pub fn run(self) {
        let Self {
            questions,
            scorer,
            mut input,
            mut output,
        } = self;
        for (index, pair) in questions.iter().enumerate() {
            let outcome = ask(pair, &scorer, &mut input, &mut output);
            tracing::debug!(question = index + 1, ?outcome, "question finished");
        }
    }
}

fn ask<R: BufRead, W: Write>(
    pair: &QuestionAnswerPair,
    scorer: &Scorer,
    input: &mut R,
    output: &mut W,
) -> AnswerOutcome {
    if let Err(e) = write!(output, "{} = ", pair.prompt()).and_then(|()| output.flush()) {
        tracing::warn!("failed to write prompt: {e}");
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => AnswerOutcome::Unanswered,
        Ok(_) => {
            if scorer.record_answer(&line, pair.expected_answer()) {
                AnswerOutcome::Correct
            } else {
                AnswerOutcome::Incorrect
            }
        }
        Err(e) => {
            tracing::warn!("failed to read answer: {e}");
            AnswerOutcome::Unanswered
        }
    }
}

impl<R, W> InteractionLoop<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Run the loop on a dedicated thread.
    ///
    /// The returned receiver resolves once every question has been
    /// processed. If the thread dies first the sender is dropped and the
    /// receiver resolves with an error instead.
    pub fn spawn(self) -> Result<oneshot::Receiver<()>, QuizError> {
        let (done_tx, done_rx) = oneshot::channel();
        thread::Builder::new()
            .name("quiz-interaction".into())
            .spawn(move || {
                self.run();
                // The coordinator may already have resolved on the deadline.
                let _ = done_tx.send(());
            })
            .map_err(QuizError::Spawn)?;
        Ok(done_rx)
    }
}
