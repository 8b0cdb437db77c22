//! The boundary to the externally-hosted pre-trained model.
//!
//! The neural network itself is an opaque collaborator: this crate only
//! constructs the one-hot input and consumes a probability back. The
//! [`Scorer`] trait is the seam; the orchestrator receives a scorer as an
//! explicit dependency rather than reaching into ambient state.
//!
//! [`ProcessScorer`] hosts the model in a user-supplied subprocess (for
//! example a thin Keras wrapper script). Tests inject stub scorers directly,
//! since any `Fn(&OneHotSequence) -> f64` closure is a [`Scorer`].

use std::time::Duration;

use thiserror::Error;

use crate::sequence::encoded::OneHotSequence;

pub mod process;

pub use process::{ProcessScorer, ProcessScorerOptions};

/// Error at the scorer boundary.
///
/// [`ScorerError::Timeout`] is special: the orchestrator treats it as a
/// per-sequence failure and continues the batch. Everything else is fatal
/// for the run.
#[derive(Error, Debug)]
pub enum ScorerError {
    /// The scorer could not be started or never finished loading its model
    #[error("Scorer unavailable: {0}")]
    Unavailable(String),
    /// A scoring call did not answer within the configured timeout
    #[error("Scorer timed out after {} s", .0.as_secs())]
    Timeout(Duration),
    /// The scorer answered with something other than a probability
    #[error("Scorer protocol error: {0}")]
    Protocol(String),
    /// The pipe to the scorer broke
    #[error("Scorer IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An opaque scoring function: one-hot encoding in, probability out.
pub trait Scorer {
    /// Predicts the probability, in `[0, 1]`, that the encoded sequence
    /// forms a G-quadruplex.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError`] when the external model cannot answer.
    fn predict(&self, encoding: &OneHotSequence) -> Result<f64, ScorerError>;
}

impl<F> Scorer for F
where
    F: Fn(&OneHotSequence) -> f64,
{
    fn predict(&self, encoding: &OneHotSequence) -> Result<f64, ScorerError> {
        Ok(self(encoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_scorers() {
        let scorer = |_: &OneHotSequence| 0.25;
        let encoding = OneHotSequence::from_sequence("ACGT");
        assert_eq!(scorer.predict(&encoding).unwrap(), 0.25);
    }

    #[test]
    fn test_closure_scorer_sees_the_encoding() {
        let scorer = |encoding: &OneHotSequence| encoding.positions() as f64 / 1000.0;
        let encoding = OneHotSequence::from_sequence(&"A".repeat(200));
        assert!((scorer.predict(&encoding).unwrap() - 0.2).abs() < 1e-12);
    }
}
