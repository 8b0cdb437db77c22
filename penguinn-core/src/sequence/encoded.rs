use crate::constants::{NUM_CHANNELS, UNKNOWN_CHANNEL};

/// Maps a nucleotide symbol to its one-hot channel.
///
/// # Encoding
///
/// - A: 0
/// - T/U: 1 (thymine and uracil share a channel)
/// - C: 2
/// - G: 3
/// - N or anything else: 9 (out-of-range sentinel)
///
/// The sentinel intentionally lies outside the 4 channels, so N positions
/// encode as an all-zero row. The pre-trained model was trained on exactly
/// this layout; changing it would silently break compatibility.
///
/// # Examples
///
/// ```rust
/// use penguinn_core::sequence::encoded::nucleotide_channel;
///
/// assert_eq!(nucleotide_channel(b'A'), 0);
/// assert_eq!(nucleotide_channel(b'T'), 1);
/// assert_eq!(nucleotide_channel(b'U'), 1);
/// assert_eq!(nucleotide_channel(b'C'), 2);
/// assert_eq!(nucleotide_channel(b'G'), 3);
/// assert_eq!(nucleotide_channel(b'N'), 9);
/// ```
#[must_use]
pub const fn nucleotide_channel(symbol: u8) -> u8 {
    match symbol {
        b'A' => 0,
        b'T' | b'U' => 1,
        b'C' => 2,
        b'G' => 3,
        _ => UNKNOWN_CHANNEL,
    }
}

/// One-hot encoding of a fixed-length sequence, shape `[1, L, 4]`.
///
/// Data is stored row-major as `f32`, one 4-channel row per position. Rows
/// sum to 1 for known nucleotides and to 0 for N positions.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotSequence {
    data: Vec<f32>,
    positions: usize,
}

impl OneHotSequence {
    /// Encodes an uppercase sequence body.
    ///
    /// Deterministic and length-preserving: the second dimension of the
    /// output shape equals the input length.
    #[must_use]
    pub fn from_sequence(body: &str) -> Self {
        let positions = body.len();
        let mut data = vec![0.0_f32; positions * NUM_CHANNELS];
        for (position, &symbol) in body.as_bytes().iter().enumerate() {
            let channel = nucleotide_channel(symbol) as usize;
            if channel < NUM_CHANNELS {
                data[position * NUM_CHANNELS + channel] = 1.0;
            }
        }
        Self { data, positions }
    }

    /// Tensor shape as `[batch, positions, channels]`.
    #[must_use]
    pub const fn shape(&self) -> [usize; 3] {
        [1, self.positions, NUM_CHANNELS]
    }

    /// Number of encoded positions (the sequence length).
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.positions
    }

    /// Flat row-major tensor data.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The 4-channel row for one position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn row(&self, position: usize) -> &[f32] {
        &self.data[position * NUM_CHANNELS..(position + 1) * NUM_CHANNELS]
    }
}
