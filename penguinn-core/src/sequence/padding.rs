use rand::Rng;

use crate::constants::FILLER_NUCLEOTIDE;

/// Pads a sequence with N up to `target_size`, splitting the filler at random
/// between the two ends.
///
/// The left pad length is drawn uniformly from `[0, deficit]` inclusive and
/// the remainder goes on the right. Each call is an independent draw; the
/// repeated-trial aggregation relies on this to estimate how sensitive a
/// score is to pad placement.
///
/// The generator is a parameter so callers (and tests) can fix the draw with
/// a seeded RNG.
///
/// # Panics
///
/// Debug builds assert that `body` is not longer than `target_size`; release
/// builds return the body unchanged in that case.
///
/// # Examples
///
/// ```rust
/// use penguinn_core::sequence::pad_sequence;
///
/// let mut rng = rand::thread_rng();
/// let padded = pad_sequence("ACGT", 10, &mut rng);
/// assert_eq!(padded.len(), 10);
/// assert!(padded.contains("ACGT"));
/// ```
pub fn pad_sequence<R: Rng>(body: &str, target_size: usize, rng: &mut R) -> String {
    debug_assert!(body.chars().count() <= target_size);
    let deficit = target_size.saturating_sub(body.chars().count());
    if deficit == 0 {
        return body.to_string();
    }

    let left = rng.gen_range(0..=deficit);
    let right = deficit - left;

    let mut padded = String::with_capacity(target_size);
    padded.extend(std::iter::repeat(FILLER_NUCLEOTIDE).take(left));
    padded.push_str(body);
    padded.extend(std::iter::repeat(FILLER_NUCLEOTIDE).take(right));
    padded
}
