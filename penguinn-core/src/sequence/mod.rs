//! Sequence normalization, validation, padding, and encoding.
//!
//! Input bodies are normalized to uppercase, checked against the configured
//! length bounds and the {A,C,T,G,U,N} alphabet, stochastically padded to the
//! model input size, and finally expanded into the one-hot layout the scorer
//! consumes.
//!
//! ## Modules
//!
//! - [`encoded`]: one-hot tensor construction
//! - [`io`]: FASTA reading via `bio`
//! - [`padding`]: random N-padding of short sequences

use crate::types::ValidationError;

pub mod encoded;
pub mod io;
pub mod padding;

pub use encoded::OneHotSequence;
pub use padding::pad_sequence;

/// Normalizes a raw sequence body to uppercase.
///
/// Case is the only thing normalized here; whitespace handling belongs to the
/// input mode (see [`crate::batch`]).
#[must_use]
pub fn normalize_sequence(raw: &str) -> String {
    raw.to_uppercase()
}

/// Test whether a byte is one of the accepted nucleotide symbols.
///
/// The alphabet is {A, C, T, G, U, N}; callers are expected to have
/// normalized case already.
#[must_use]
pub const fn is_allowed_nucleotide(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'C' | b'T' | b'G' | b'U' | b'N')
}

/// Validates a normalized sequence body against length bounds and alphabet.
///
/// Checks apply in strict order and the first failure wins:
///
/// 1. longer than `max_size` → [`ValidationError::TooLong`]
/// 2. shorter than `min_size` → [`ValidationError::TooShort`]
/// 3. any symbol outside {A,C,T,G,U,N} → [`ValidationError::UnknownCharacters`]
///
/// # Errors
///
/// Returns the first failed check as a [`ValidationError`].
///
/// # Examples
///
/// ```rust
/// use penguinn_core::sequence::validate_sequence;
///
/// assert!(validate_sequence(&"ACGT".repeat(20), 40, 200).is_ok());
/// assert!(validate_sequence("ACGT", 40, 200).is_err());
/// ```
pub fn validate_sequence(
    body: &str,
    min_size: usize,
    max_size: usize,
) -> Result<(), ValidationError> {
    let length = body.chars().count();
    if length > max_size {
        return Err(ValidationError::TooLong { max: max_size });
    }
    if length < min_size {
        return Err(ValidationError::TooShort { min: min_size });
    }
    if !body.bytes().all(is_allowed_nucleotide) {
        return Err(ValidationError::UnknownCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sequence() {
        assert_eq!(normalize_sequence("acgt"), "ACGT");
        assert_eq!(normalize_sequence("AcGtNu"), "ACGTNU");
        assert_eq!(normalize_sequence(""), "");
    }

    #[test]
    fn test_is_allowed_nucleotide() {
        for symbol in [b'A', b'C', b'T', b'G', b'U', b'N'] {
            assert!(is_allowed_nucleotide(symbol));
        }
        for symbol in [b'a', b'X', b'-', b' ', b'0'] {
            assert!(!is_allowed_nucleotide(symbol));
        }
    }

    #[test]
    fn test_validate_accepts_full_alphabet() {
        let body = "ACTGUN".repeat(10);
        assert!(validate_sequence(&body, 40, 200).is_ok());
    }

    #[test]
    fn test_validate_length_bounds() {
        assert_eq!(
            validate_sequence(&"A".repeat(201), 40, 200),
            Err(ValidationError::TooLong { max: 200 })
        );
        assert_eq!(
            validate_sequence(&"A".repeat(10), 40, 200),
            Err(ValidationError::TooShort { min: 40 })
        );
        assert!(validate_sequence(&"A".repeat(200), 40, 200).is_ok());
        assert!(validate_sequence(&"A".repeat(40), 40, 200).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_characters() {
        let body = format!("{}X", "ACGT".repeat(10));
        assert_eq!(
            validate_sequence(&body, 40, 200),
            Err(ValidationError::UnknownCharacters)
        );
    }

    #[test]
    fn test_validate_priority_order() {
        // Too long AND invalid characters: length wins.
        let body = format!("{}XYZ", "A".repeat(200));
        assert_eq!(
            validate_sequence(&body, 40, 200),
            Err(ValidationError::TooLong { max: 200 })
        );

        // Too short AND invalid characters: length wins again.
        assert_eq!(
            validate_sequence("XY", 40, 200),
            Err(ValidationError::TooShort { min: 40 })
        );
    }

    #[test]
    fn test_validate_is_deterministic() {
        let body = "ACGTX".repeat(10);
        let first = validate_sequence(&body, 40, 200);
        for _ in 0..5 {
            assert_eq!(validate_sequence(&body, 40, 200), first);
        }
    }
}
