use std::fmt;

use thiserror::Error;

use crate::constants::{PRECISE_THRESHOLD, SENSITIVE_THRESHOLD};
use crate::scorer::ScorerError;

/// A single input sequence: an optional name plus its nucleotide body.
///
/// Records are constructed fresh per prediction request and immutable once
/// parsed. FASTA input yields named records; single and multiline input
/// yields unnamed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Identifier from a FASTA header, if the input mode provides one
    pub name: Option<String>,
    /// Nucleotide body over {A,C,T,G,U,N}, case-normalized before validation
    pub body: String,
}

impl SequenceRecord {
    /// Create a record without a name (single and multiline input modes).
    #[must_use]
    pub const fn unnamed(body: String) -> Self {
        Self { name: None, body }
    }

    /// Create a named record (FASTA input mode).
    #[must_use]
    pub const fn named(name: String, body: String) -> Self {
        Self {
            name: Some(name),
            body,
        }
    }
}

/// Qualitative band a probability falls into under the fixed score thresholds.
///
/// The two cutoffs (0.85 "Precise", 0.5 "Sensitive") partition the unit
/// interval into three bands. They were tuned against the trained model and
/// are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdBand {
    /// Score exceeds the Precise threshold (> 0.85)
    Precise,
    /// Score exceeds the Sensitive threshold (> 0.5) but not the Precise one
    Sensitive,
    /// Score passes neither threshold
    Fails,
}

impl ThresholdBand {
    /// Classify a probability into its threshold band.
    #[must_use]
    pub fn classify(probability: f64) -> Self {
        if probability > PRECISE_THRESHOLD {
            Self::Precise
        } else if probability > SENSITIVE_THRESHOLD {
            Self::Sensitive
        } else {
            Self::Fails
        }
    }

    /// Human-readable description used in reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Precise => "higher than PENGUINN Precise score threshold",
            Self::Sensitive => "higher than PENGUINN Sensitive score threshold",
            Self::Fails => "lower than PENGUINN score thresholds",
        }
    }
}

impl fmt::Display for ThresholdBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Per-sequence validation failure.
///
/// These are recovered locally: an invalid sequence is reported inline and
/// never aborts the rest of the batch. Checks apply in strict order, so a
/// body that is both too long and contains invalid characters reports only
/// the length failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body exceeds the configured maximum length
    #[error("The sequence is too long. The sequence needs to be shorter or equal to {max}.")]
    TooLong {
        /// Configured maximum length
        max: usize,
    },
    /// Body falls short of the configured minimum length
    #[error("The sequence is too short. The sequence needs to be longer or equal to {min}.")]
    TooShort {
        /// Configured minimum length
        min: usize,
    },
    /// Body contains a symbol outside the {A,C,T,G,U,N} alphabet
    #[error("The sequence must consist only of \"A\", \"C\", \"T\", \"G\", \"U\" and \"N\" characters.")]
    UnknownCharacters,
}

/// Fatal error for a whole prediction run.
///
/// Per-sequence validation failures are *not* represented here; they travel
/// inside [`crate::results::Outcome`] so one bad sequence cannot sink a batch.
#[derive(Error, Debug)]
pub enum PenguinnError {
    /// The external scorer could not be loaded or failed mid-run
    #[error("Scorer error: {0}")]
    Scorer(#[from] ScorerError),
    /// The raw input could not be split into sequences (e.g. malformed FASTA)
    #[error("Parse error: {0}")]
    Parse(String),
    /// The configuration violates a size invariant
    #[error("Configuration error: {0}")]
    Config(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
