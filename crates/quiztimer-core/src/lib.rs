//! quiztimer-core — Question loading, scoring and the timed session engine.
//!
//! A session asks every question of a shuffled [`model::QuestionSet`] on a
//! blocking interaction thread while a deadline runs; whichever finishes
//! first decides the [`session::SessionOutcome`].

pub mod config;
pub mod deadline;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod model;
pub mod scorer;
pub mod session;

#[cfg(test)]
mod test_support;

pub use error::QuizError;
