use crate::constants::{
    DEFAULT_MAX_SEQUENCE_LENGTH, DEFAULT_MIN_SEQUENCE_LENGTH, DEFAULT_TRIALS, MODEL_INPUT_SIZE,
};
use crate::types::PenguinnError;

/// How raw input text is split into individual sequences.
///
/// # Modes
///
/// - **Single**: all whitespace and line breaks are stripped and the whole
///   input becomes one unnamed sequence
/// - **Multiline**: one sequence per line, names absent, empty lines kept
///   (they fail validation downstream)
/// - **Fasta**: standard FASTA parsing, names taken from record headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One pasted sequence, whitespace-tolerant
    #[default]
    Single,
    /// One sequence per line
    Multiline,
    /// FASTA-formatted batch
    Fasta,
}

/// Whether scoring runs once or averages repeated stochastic-padding trials.
///
/// Pad placement is drawn at random, so a short sequence can score slightly
/// differently depending on where the filler lands. Averaged mode repeats the
/// pad-encode-score cycle and reports a mean with an error margin; single-shot
/// mode scores one draw and omits the margin entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPolicy {
    /// Score one padding draw, no error margin
    SingleShot,
    /// Average over `trials` independent padding draws
    Averaged {
        /// Number of pad-encode-score repetitions
        trials: usize,
    },
}

impl TrialPolicy {
    /// Number of scoring calls this policy performs per sequence.
    #[must_use]
    pub const fn trials(self) -> usize {
        match self {
            Self::SingleShot => 1,
            Self::Averaged { trials } => trials,
        }
    }
}

impl Default for TrialPolicy {
    fn default() -> Self {
        Self::Averaged {
            trials: DEFAULT_TRIALS,
        }
    }
}

/// Configuration for a prediction run.
///
/// # Examples
///
/// ```rust
/// use penguinn_core::config::{InputMode, PenguinnConfig, TrialPolicy};
///
/// let config = PenguinnConfig {
///     input_mode: InputMode::Fasta,
///     trial_policy: TrialPolicy::SingleShot,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PenguinnConfig {
    /// How raw input text is split into sequences.
    ///
    /// **Default**: [`InputMode::Single`]
    pub input_mode: InputMode,

    /// Minimum accepted sequence length.
    ///
    /// Shorter sequences are skipped with a per-sequence error.
    ///
    /// **Default**: `40`
    pub min_size: usize,

    /// Maximum accepted sequence length.
    ///
    /// Must not exceed [`model_size`](Self::model_size); the model cannot
    /// score more positions than its fixed input window.
    ///
    /// **Default**: `200`
    pub max_size: usize,

    /// Fixed input length of the scoring model. Sequences shorter than this
    /// are padded with N up to it.
    ///
    /// **Default**: `200`
    pub model_size: usize,

    /// Single-shot scoring or repeated-trial averaging.
    ///
    /// **Default**: 100 averaged trials
    pub trial_policy: TrialPolicy,
}

impl PenguinnConfig {
    /// Checks the size invariant `min_size <= max_size <= model_size`.
    ///
    /// The predictor runs this before every batch, so library callers get the
    /// same protection as the CLI: a sequence accepted by validation always
    /// fits the model's input window.
    ///
    /// # Errors
    ///
    /// Returns [`PenguinnError::Config`] when the limits are inconsistent.
    pub fn validate(&self) -> Result<(), PenguinnError> {
        if self.min_size > self.max_size {
            return Err(PenguinnError::Config(format!(
                "minimum size {} exceeds maximum size {}",
                self.min_size, self.max_size
            )));
        }
        if self.max_size > self.model_size {
            return Err(PenguinnError::Config(format!(
                "maximum size {} exceeds the model input size {}",
                self.max_size, self.model_size
            )));
        }
        Ok(())
    }
}

impl Default for PenguinnConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::default(),
            min_size: DEFAULT_MIN_SEQUENCE_LENGTH,
            max_size: DEFAULT_MAX_SEQUENCE_LENGTH,
            model_size: MODEL_INPUT_SIZE,
            trial_policy: TrialPolicy::default(),
        }
    }
}
