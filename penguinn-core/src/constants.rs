/// Version string for PENGUINN
pub const VERSION: &str = "1.0.0";

// =============================================================================
// =============================================================================

/// Fixed input length of the pre-trained model, in nucleotides
pub const MODEL_INPUT_SIZE: usize = 200;

/// Default minimum accepted sequence length
pub const DEFAULT_MIN_SEQUENCE_LENGTH: usize = 40;

/// Default maximum accepted sequence length
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 200;

/// Nucleotide used to pad short sequences up to the model input size
pub const FILLER_NUCLEOTIDE: char = 'N';

// =============================================================================
// =============================================================================

/// Number of one-hot channels consumed by the model (A, T/U, C, G)
pub const NUM_CHANNELS: usize = 4;

/// Out-of-range channel assigned to N and any unknown symbol.
///
/// Under a 4-channel one-hot scheme this yields an all-zero row, which is
/// how the pre-trained model was taught to see padding.
pub const UNKNOWN_CHANNEL: u8 = 9;

// =============================================================================
// =============================================================================

/// Probability above which a score passes the Precise threshold
pub const PRECISE_THRESHOLD: f64 = 0.85;

/// Probability above which a score passes the Sensitive threshold
pub const SENSITIVE_THRESHOLD: f64 = 0.5;

/// Default number of stochastic padding trials in averaged mode
pub const DEFAULT_TRIALS: usize = 100;

/// Smallest error margin rendered numerically; anything below shows as "<0.001"
pub const MARGIN_DISPLAY_FLOOR: f64 = 0.001;

// =============================================================================
// =============================================================================

/// Column width used when wrapping sequence bodies in reports
pub const REPORT_WRAP_WIDTH: usize = 50;

/// Line the scorer subprocess prints once its model is loaded
pub const SCORER_READY_TOKEN: &str = "ready";

/// Default per-call scorer timeout in seconds
pub const DEFAULT_SCORER_TIMEOUT_SECS: u64 = 30;

/// Default number of extra attempts when the scorer fails to load
pub const DEFAULT_SCORER_LOAD_RETRIES: usize = 2;
