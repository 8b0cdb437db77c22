use std::io::{Cursor, Read};

use bio::io::fasta;

use crate::types::{PenguinnError, SequenceRecord};

/// Reads all FASTA records from a reader, in file order.
///
/// Parsing is strict: a malformed record is a fatal [`PenguinnError::Parse`]
/// surfaced before any per-sequence processing begins, not a per-sequence
/// failure.
///
/// # Errors
///
/// Returns [`PenguinnError::Parse`] if the FASTA format is invalid or a body
/// is not valid UTF-8.
pub fn read_fasta_records<R: Read>(reader: R) -> Result<Vec<SequenceRecord>, PenguinnError> {
    let reader = fasta::Reader::new(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| PenguinnError::Parse(format!("FASTA parsing error: {e}")))?;
        let body = String::from_utf8(record.seq().to_vec())
            .map_err(|e| PenguinnError::Parse(format!("non-UTF-8 sequence body: {e}")))?;
        records.push(SequenceRecord::named(record.id().to_string(), body));
    }

    Ok(records)
}

/// Parses FASTA records out of an in-memory string.
///
/// # Errors
///
/// Same as [`read_fasta_records`].
pub fn parse_fasta_str(content: &str) -> Result<Vec<SequenceRecord>, PenguinnError> {
    read_fasta_records(Cursor::new(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let records = parse_fasta_str(">seq1\nACGT\nGGGG\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("seq1"));
        assert_eq!(records[0].body, "ACGTGGGG");
    }

    #[test]
    fn test_parse_multiple_records_in_order() {
        let records = parse_fasta_str(">a\nAAAA\n>b\nCCCC\n>c\nGGGG\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name.as_deref(), Some("a"));
        assert_eq!(records[1].name.as_deref(), Some("b"));
        assert_eq!(records[2].name.as_deref(), Some("c"));
    }

    #[test]
    fn test_parse_empty_input() {
        let records = parse_fasta_str("").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_fasta_is_fatal() {
        let result = parse_fasta_str("ACGT\nGGGG\n");
        match result {
            Err(PenguinnError::Parse(message)) => {
                assert!(message.contains("FASTA"), "unexpected message: {message}");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_description_is_not_part_of_the_name() {
        let records = parse_fasta_str(">seq1 putative G4 region\nACGT\n").unwrap();
        assert_eq!(records[0].name.as_deref(), Some("seq1"));
    }
}
