//! Quiz error types.
//!
//! Every variant is fatal to session start. Once a session is running no
//! error is surfaced; the only results are `Completed` and `TimedOut`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or starting a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The quiz file could not be opened or read.
    #[error("failed reading the quiz file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The quiz file is not valid CSV.
    #[error("failed parsing quiz file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row does not have both a question and an answer column.
    #[error("malformed row at line {line} in {}: expected 2 columns, found {fields}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    /// There are no questions to ask.
    #[error("quiz contains no questions")]
    EmptyQuestionSet,

    /// The interaction thread could not be started.
    #[error("failed to start the interaction loop: {0}")]
    Spawn(#[source] io::Error),
}
