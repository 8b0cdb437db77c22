use rand::Rng;

use crate::aggregate::score_sequence;
use crate::batch::parse_batch;
use crate::config::PenguinnConfig;
use crate::results::{Outcome, PredictionResults, SequenceReport};
use crate::scorer::{Scorer, ScorerError};
use crate::sequence::{normalize_sequence, validate_sequence};
use crate::types::{PenguinnError, SequenceRecord};

/// The prediction orchestrator.
///
/// Composes the whole pipeline: parse raw input into sequences, normalize
/// case, validate, pad-encode-score (possibly repeatedly), and collect
/// per-sequence reports. The scorer arrives as an explicit dependency, never
/// ambient state, so callers decide whether the model lives in a subprocess,
/// a JS callback, or a test stub.
///
/// Per-sequence failures are independent: a sequence that fails validation
/// (or times out in the scorer) produces an error fragment and the batch
/// continues. Only scorer breakage and unparsable batch input abort a run.
///
/// # Examples
///
/// ```rust
/// use penguinn_core::{G4Predictor, config::PenguinnConfig};
/// use penguinn_core::sequence::encoded::OneHotSequence;
///
/// let predictor = G4Predictor::new(PenguinnConfig::default());
/// let scorer = |_: &OneHotSequence| 0.9;
///
/// let results = predictor.predict_text(&"ACGT".repeat(20), &scorer)?;
/// assert_eq!(results.scored(), 1);
/// # Ok::<(), penguinn_core::types::PenguinnError>(())
/// ```
#[derive(Debug)]
pub struct G4Predictor {
    /// Configuration for this predictor
    pub config: PenguinnConfig,
}

impl G4Predictor {
    /// Creates a predictor with the given configuration.
    #[must_use]
    pub const fn new(config: PenguinnConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline on raw input text.
    ///
    /// Input is split according to the configured [`InputMode`]
    /// (see [`crate::batch::parse_batch`]), then each sequence is processed
    /// independently with a thread-local random source for padding.
    ///
    /// [`InputMode`]: crate::config::InputMode
    ///
    /// # Errors
    ///
    /// Returns [`PenguinnError::Config`] for an inconsistent configuration,
    /// [`PenguinnError::Parse`] for unparsable batch input, and
    /// [`PenguinnError::Scorer`] when the scorer breaks (timeouts excepted;
    /// those fail only the affected sequence).
    pub fn predict_text(
        &self,
        raw: &str,
        scorer: &dyn Scorer,
    ) -> Result<PredictionResults, PenguinnError> {
        let records = parse_batch(raw, self.config.input_mode)?;
        let mut rng = rand::thread_rng();
        self.predict_records(records, scorer, &mut rng)
    }

    /// Runs the pipeline on already-parsed records with a caller-supplied
    /// random source.
    ///
    /// This is the seedable entry point; [`predict_text`](Self::predict_text)
    /// is the convenience wrapper around it.
    ///
    /// # Errors
    ///
    /// Same as [`predict_text`](Self::predict_text), minus parse errors.
    pub fn predict_records<R: Rng>(
        &self,
        records: Vec<SequenceRecord>,
        scorer: &dyn Scorer,
        rng: &mut R,
    ) -> Result<PredictionResults, PenguinnError> {
        self.config.validate()?;
        log::info!("Scoring {} sequence(s)", records.len());

        let mut reports = Vec::with_capacity(records.len());
        for record in records {
            let body = normalize_sequence(&record.body);
            let outcome = self.score_record(&body, scorer, rng)?;
            reports.push(SequenceReport {
                name: record.name,
                body,
                outcome,
            });
        }

        Ok(PredictionResults { reports })
    }

    fn score_record<R: Rng>(
        &self,
        body: &str,
        scorer: &dyn Scorer,
        rng: &mut R,
    ) -> Result<Outcome, PenguinnError> {
        if let Err(error) = validate_sequence(body, self.config.min_size, self.config.max_size) {
            log::debug!("Skipping invalid sequence: {error}");
            return Ok(Outcome::Invalid(error));
        }

        match score_sequence(
            body,
            self.config.model_size,
            self.config.trial_policy,
            scorer,
            rng,
        ) {
            Ok(aggregate) => Ok(Outcome::Scored(aggregate)),
            // A stuck scorer call fails this sequence only; the rest of the
            // batch still runs.
            Err(ScorerError::Timeout(timeout)) => {
                log::warn!("Scorer timed out after {} s", timeout.as_secs());
                Ok(Outcome::Unscored(format!(
                    "The scorer did not respond within {} s.",
                    timeout.as_secs()
                )))
            }
            Err(error) => Err(PenguinnError::Scorer(error)),
        }
    }
}
