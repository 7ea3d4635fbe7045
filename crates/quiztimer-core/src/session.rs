//! Session coordinator.
//!
//! Starts the interaction loop and the deadline together and races them.
//! Whichever finishes first decides the [`SessionOutcome`]; the other is
//! abandoned. The loop's thread is never signalled to stop.

use std::fmt;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::deadline::Deadline;
use crate::error::QuizError;
use crate::interaction::InteractionLoop;
use crate::model::QuestionSet;
use crate::scorer::{ScoreSnapshot, Scorer};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every question was processed before the deadline.
    Completed,
    /// The deadline elapsed first.
    TimedOut,
}

/// Final result of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Score at the moment the session resolved.
    pub score: ScoreSnapshot,
    /// Wall-clock time from session start to resolution.
    pub elapsed: Duration,
}

impl SessionReport {
    pub fn timed_out(&self) -> bool {
        self.outcome == SessionOutcome::TimedOut
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.timed_out() {
            write!(f, "Times up, ")?;
        }
        write!(f, "{}", self.score)
    }
}

/// Receives the result of a session, exactly once.
pub trait ResultReporter: Send + Sync {
    fn report(&self, report: &SessionReport);
}

/// Reporter that ignores the result.
pub struct NoopReporter;

impl ResultReporter for NoopReporter {
    fn report(&self, _: &SessionReport) {}
}

/// One timed run through a question set.
pub struct Session<R, W> {
    questions: QuestionSet,
    timeout: Duration,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Prompts go to `output`, answers are read line by line from `input`.
    pub fn new(questions: QuestionSet, timeout: Duration, input: R, output: W) -> Self {
        Self {
            questions,
            timeout,
            input,
            output,
        }
    }

    /// Run the session to its single outcome and hand it to `reporter`.
    ///
    /// The only error is failing to start the interaction thread, in which
    /// case no timer is started and the reporter is not called.
    pub async fn run(self, reporter: &dyn ResultReporter) -> Result<SessionReport, QuizError> {
        let total = self.questions.len();
        let scorer = Arc::new(Scorer::new(total));
        tracing::info!(questions = total, timeout = ?self.timeout, "session started");

        let started = Instant::now();
        let all_answered = InteractionLoop::new(
            self.questions,
            Arc::clone(&scorer),
            self.input,
            self.output,
        )
        .spawn()?;
        let mut deadline = Deadline::start(self.timeout);

        let outcome = tokio::select! {
            result = all_answered => {
                if result.is_err() {
                    tracing::error!("interaction loop stopped before the last question");
                }
                SessionOutcome::Completed
            }
            () = deadline.elapsed() => SessionOutcome::TimedOut,
        };
        drop(deadline);

        // Completed: the loop has finished writing. TimedOut: it is parked
        // on a read and will not record anything we report.
        let report = SessionReport {
            outcome,
            score: scorer.snapshot(),
            elapsed: started.elapsed(),
        };
        tracing::info!(
            ?outcome,
            correct = report.score.correct,
            total = report.score.total,
            "session resolved"
        );

        reporter.report(&report);
        Ok(report)
    }
}
