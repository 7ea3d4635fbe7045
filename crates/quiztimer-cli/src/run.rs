//! Load the quiz, run one session, print the result.

use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Result;

use quiztimer_core::config::{load_config_from, ConfigOverrides};
use quiztimer_core::loader::load_question_set;
use quiztimer_core::session::{ResultReporter, Session, SessionReport};

/// Prints the result line to stdout.
struct ConsoleReporter;

impl ResultReporter for ConsoleReporter {
    fn report(&self, report: &SessionReport) {
        let mut stdout = io::stdout().lock();
        // A timed-out session leaves the last prompt unanswered on its line.
        let lead = if report.timed_out() { "\n" } else { "" };
        if let Err(e) = writeln!(stdout, "{lead}{report}").and_then(|()| stdout.flush()) {
            tracing::warn!("failed to print result: {e}");
        }
    }
}

pub async fn execute(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?.with_overrides(overrides);
    tracing::debug!(?config, "resolved configuration");

    // Anything that fails here ends the program before a timer or input
    // thread exists.
    let questions = load_question_set(&config.path, config.seed)?;

    println!(
        "Math quiz. Complete {} questions in {} seconds",
        questions.len(),
        config.timeout.as_secs()
    );

    let session = Session::new(
        questions,
        config.timeout,
        BufReader::new(io::stdin()),
        io::stdout(),
    );
    session.run(&ConsoleReporter).await?;

    Ok(())
}
