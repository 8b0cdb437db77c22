//! Splitting raw input text into individual sequence records.

use crate::config::InputMode;
use crate::sequence::io::parse_fasta_str;
use crate::types::{PenguinnError, SequenceRecord};

/// Splits raw user input into an ordered list of sequence records.
///
/// - [`InputMode::Single`]: all whitespace and line breaks are stripped and
///   the remainder becomes exactly one unnamed record
/// - [`InputMode::Multiline`]: one unnamed record per line; interior empty
///   lines are kept and will fail validation as too short
/// - [`InputMode::Fasta`]: delegated to the FASTA parser, names taken from
///   record headers
///
/// # Errors
///
/// Returns [`PenguinnError::Parse`] for malformed FASTA input; the other two
/// modes cannot fail.
///
/// # Examples
///
/// ```rust
/// use penguinn_core::batch::parse_batch;
/// use penguinn_core::config::InputMode;
///
/// let records = parse_batch("ACGT\nacgt", InputMode::Single)?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].body, "ACGTacgt");
/// # Ok::<(), penguinn_core::types::PenguinnError>(())
/// ```
pub fn parse_batch(raw: &str, mode: InputMode) -> Result<Vec<SequenceRecord>, PenguinnError> {
    match mode {
        InputMode::Single => {
            let body: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            Ok(vec![SequenceRecord::unnamed(body)])
        }
        InputMode::Multiline => Ok(raw
            .lines()
            .map(|line| SequenceRecord::unnamed(line.to_string()))
            .collect()),
        InputMode::Fasta => parse_fasta_str(raw),
    }
}
