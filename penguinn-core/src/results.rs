use crate::aggregate::AggregateResult;
use crate::types::ValidationError;

/// What happened to one sequence in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Validation passed and the scorer answered
    Scored(AggregateResult),
    /// Validation failed; the scorer was never invoked for this sequence
    Invalid(ValidationError),
    /// Validation passed but the scorer timed out for this sequence
    Unscored(String),
}

/// Report for one sequence: its (normalized) body, optional name, and outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceReport {
    /// Name from the FASTA header, if any
    pub name: Option<String>,
    /// Uppercase-normalized body as it was validated
    pub body: String,
    /// Scoring or failure outcome
    pub outcome: Outcome,
}

/// Results of a whole prediction run, in input order.
///
/// Per-sequence failures live inside the individual reports; a
/// `PredictionResults` value always covers every parsed sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionResults {
    /// One report per input sequence, in input order
    pub reports: Vec<SequenceReport>,
}

impl PredictionResults {
    /// Number of sequences that received a score.
    #[must_use]
    pub fn scored(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| matches!(report.outcome, Outcome::Scored(_)))
            .count()
    }

    /// Number of sequences skipped or failed (validation errors and timeouts).
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.reports.len() - self.scored()
    }

    /// Number of sequences rejected by validation.
    #[must_use]
    pub fn invalid(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| matches!(report.outcome, Outcome::Invalid(_)))
            .count()
    }

    /// Number of sequences that passed validation but were never scored
    /// (scorer timeouts).
    #[must_use]
    pub fn unscored(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| matches!(report.outcome, Outcome::Unscored(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_report() -> SequenceReport {
        SequenceReport {
            name: None,
            body: "ACGT".repeat(10),
            outcome: Outcome::Scored(AggregateResult {
                mean: 0.5,
                std_dev: 0.0,
                margin: None,
                trials: 1,
            }),
        }
    }

    #[test]
    fn test_scored_and_skipped_counts() {
        let results = PredictionResults {
            reports: vec![
                scored_report(),
                SequenceReport {
                    name: Some("bad".to_string()),
                    body: "ACG".to_string(),
                    outcome: Outcome::Invalid(ValidationError::TooShort { min: 40 }),
                },
                SequenceReport {
                    name: None,
                    body: "ACGT".repeat(10),
                    outcome: Outcome::Unscored("timed out".to_string()),
                },
            ],
        };

        assert_eq!(results.scored(), 1);
        assert_eq!(results.skipped(), 2);
        assert_eq!(results.invalid(), 1);
        assert_eq!(results.unscored(), 1);
    }

    #[test]
    fn test_empty_results() {
        let results = PredictionResults::default();
        assert_eq!(results.scored(), 0);
        assert_eq!(results.skipped(), 0);
        assert_eq!(results.invalid(), 0);
        assert_eq!(results.unscored(), 0);
    }
}
