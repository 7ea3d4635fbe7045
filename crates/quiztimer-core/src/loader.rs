//! CSV quiz file loader.
//!
//! Loads question/answer pairs from a headerless CSV file, one question per
//! row, and checks them for common mistakes.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{QuestionAnswerPair, QuestionSet};

/// Read and parse a quiz file into question/answer pairs, in file order.
pub fn load_pairs(path: &Path) -> Result<Vec<QuestionAnswerPair>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pairs(file, path)
}

/// Parse CSV content into question/answer pairs (useful for testing).
///
/// The first column is the question, the second the answer. Further
/// columns are ignored. A row with fewer than two columns fails the whole
/// load; nothing is returned for the rows before it.
pub fn parse_pairs<R: Read>(
    reader: R,
    source_path: &Path,
) -> Result<Vec<QuestionAnswerPair>, QuizError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| QuizError::Parse {
            path: source_path.to_path_buf(),
            source,
        })?;
        match (record.get(0), record.get(1)) {
            (Some(prompt), Some(answer)) => {
                pairs.push(QuestionAnswerPair::new(prompt, answer));
            }
            _ => {
                return Err(QuizError::MalformedRow {
                    path: source_path.to_path_buf(),
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    fields: record.len(),
                });
            }
        }
    }

    tracing::debug!(
        "loaded {} questions from {}",
        pairs.len(),
        source_path.display()
    );
    Ok(pairs)
}

/// Load a quiz file and shuffle it into a [`QuestionSet`].
///
/// With a `seed` the order is reproducible; without one it changes from
/// run to run. An empty file is rejected here, before any session exists.
pub fn load_question_set(path: &Path, seed: Option<u64>) -> Result<QuestionSet, QuizError> {
    let pairs = load_pairs(path)?;
    for warning in validate_pairs(&pairs) {
        tracing::warn!("{}: {}", path.display(), warning.message);
    }
    match seed {
        Some(seed) => QuestionSet::shuffled_with_seed(pairs, seed),
        None => QuestionSet::shuffled(pairs),
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based index of the offending row.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Validate question/answer pairs for common issues.
///
/// None of these stop a session from running.
pub fn validate_pairs(pairs: &[QuestionAnswerPair]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_prompts = HashSet::new();
    for (index, pair) in pairs.iter().enumerate() {
        if pair.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: format!("question {} is empty", index + 1),
            });
        } else if !seen_prompts.insert(pair.prompt().trim()) {
            warnings.push(ValidationWarning {
                index,
                message: format!("duplicate question: {}", pair.prompt().trim()),
            });
        }

        // A blank answer is matched by simply pressing enter.
        if pair.expected_answer().trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: format!("question {} has an empty answer", index + 1),
            });
        }
    }

    warnings
}
