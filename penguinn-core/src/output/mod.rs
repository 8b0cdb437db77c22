//! Rendering prediction results into human-readable report text.
//!
//! Each sequence becomes one fragment: its optional name, the body wrapped
//! at 50 columns under an "Input:" section, then either an "Error:" section
//! with the failure message or an "Output:" section with the probability,
//! error margin, and threshold verdict. Fragments concatenate in input order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use penguinn_core::{G4Predictor, config::PenguinnConfig};
//! use penguinn_core::output::write_results;
//! use penguinn_core::sequence::encoded::OneHotSequence;
//! use std::io::stdout;
//!
//! let predictor = G4Predictor::new(PenguinnConfig::default());
//! let scorer = |_: &OneHotSequence| 0.9;
//! let results = predictor.predict_text("GGGTTAGGGTTAGGGTTAGGGTTAGGGTTAGGGTTAGGG", &scorer)?;
//! write_results(&mut stdout(), &results)?;
//! # Ok::<(), penguinn_core::types::PenguinnError>(())
//! ```

use std::io::Write;

use crate::aggregate::AggregateResult;
use crate::constants::{MARGIN_DISPLAY_FLOOR, REPORT_WRAP_WIDTH};
use crate::results::{Outcome, PredictionResults, SequenceReport};
use crate::types::{PenguinnError, ThresholdBand};

/// Writes every report fragment of a run, in input order.
///
/// # Errors
///
/// Returns [`PenguinnError::Io`] if the writer fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &PredictionResults,
) -> Result<(), PenguinnError> {
    for report in &results.reports {
        write_report(writer, report)?;
    }
    Ok(())
}

/// Writes one report fragment.
///
/// # Errors
///
/// Returns [`PenguinnError::Io`] if the writer fails.
pub fn write_report<W: Write>(writer: &mut W, report: &SequenceReport) -> Result<(), PenguinnError> {
    if let Some(name) = &report.name {
        writeln!(writer, ">{name}")?;
    }
    writeln!(writer, "Input:")?;
    for line in wrap_sequence(&report.body, REPORT_WRAP_WIDTH) {
        writeln!(writer, "{line}")?;
    }
    writeln!(writer)?;

    match &report.outcome {
        Outcome::Scored(aggregate) => {
            writeln!(writer, "Output:")?;
            writeln!(
                writer,
                "Probability of G4 complex = {}",
                format_probability(aggregate)
            )?;
            writeln!(
                writer,
                "The score is {}.",
                ThresholdBand::classify(aggregate.mean)
            )?;
        }
        Outcome::Invalid(error) => {
            writeln!(writer, "Error:")?;
            writeln!(writer, "{error}")?;
        }
        Outcome::Unscored(reason) => {
            writeln!(writer, "Error:")?;
            writeln!(writer, "{reason}")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

/// Splits a body into lines of at most `width` characters.
fn wrap_sequence(body: &str, width: usize) -> Vec<String> {
    let symbols: Vec<char> = body.chars().collect();
    symbols
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Formats the mean probability to 3 decimals, with the ± margin when the
/// trial policy produced one. Margins below the display floor render as
/// "<0.001" instead of rounding to a misleading zero.
fn format_probability(aggregate: &AggregateResult) -> String {
    match aggregate.margin {
        Some(margin) if margin < MARGIN_DISPLAY_FLOOR => {
            format!("{:.3} ± <0.001", aggregate.mean)
        }
        Some(margin) => format!("{:.3} ± {margin:.3}", aggregate.mean),
        None => format!("{:.3}", aggregate.mean),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;
    use std::io::Cursor;

    fn render(report: &SequenceReport) -> String {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        write_report(&mut cursor, report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn scored(mean: f64, margin: Option<f64>) -> Outcome {
        Outcome::Scored(AggregateResult {
            mean,
            std_dev: 0.0,
            margin,
            trials: if margin.is_some() { 100 } else { 1 },
        })
    }

    #[test]
    fn test_wrap_sequence_at_fifty_columns() {
        let lines = wrap_sequence(&"A".repeat(120), 50);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 50);
        assert_eq!(lines[1].len(), 50);
        assert_eq!(lines[2].len(), 20);
    }

    #[test]
    fn test_wrap_sequence_short_body() {
        assert_eq!(wrap_sequence("ACGT", 50), vec!["ACGT".to_string()]);
        assert!(wrap_sequence("", 50).is_empty());
    }

    #[test]
    fn test_report_wraps_the_body() {
        let output = render(&SequenceReport {
            name: None,
            body: "G".repeat(70),
            outcome: scored(0.2, None),
        });
        assert!(output.contains(&format!("{}\n{}", "G".repeat(50), "G".repeat(20))));
    }

    #[test]
    fn test_precise_band_label() {
        let output = render(&SequenceReport {
            name: None,
            body: "ACGT".repeat(10),
            outcome: scored(0.87126887, None),
        });
        assert!(output.contains("Output:"));
        assert!(output.contains("Probability of G4 complex = 0.871"));
        assert!(output.contains("higher than PENGUINN Precise score threshold"));
    }

    #[test]
    fn test_failing_band_label_and_rounding() {
        let output = render(&SequenceReport {
            name: None,
            body: "ACGT".repeat(10),
            outcome: scored(0.00069759286, None),
        });
        assert!(output.contains("Probability of G4 complex = 0.001"));
        assert!(output.contains("lower than PENGUINN score thresholds"));
    }

    #[test]
    fn test_margin_rendering() {
        let output = render(&SequenceReport {
            name: None,
            body: "ACGT".repeat(10),
            outcome: scored(0.6, Some(0.0123)),
        });
        assert!(output.contains("0.600 ± 0.012"));
        assert!(output.contains("higher than PENGUINN Sensitive score threshold"));
    }

    #[test]
    fn test_margin_below_floor_renders_as_less_than() {
        let output = render(&SequenceReport {
            name: None,
            body: "ACGT".repeat(10),
            outcome: scored(0.6, Some(0.0001)),
        });
        assert!(output.contains("0.600 ± <0.001"));
    }

    #[test]
    fn test_single_shot_has_no_margin_annotation() {
        let output = render(&SequenceReport {
            name: None,
            body: "ACGT".repeat(10),
            outcome: scored(0.6, None),
        });
        assert!(output.contains("Probability of G4 complex = 0.600\n"));
        assert!(!output.contains('±'));
    }

    #[test]
    fn test_error_fragment() {
        let output = render(&SequenceReport {
            name: None,
            body: "ACG".to_string(),
            outcome: Outcome::Invalid(ValidationError::TooShort { min: 40 }),
        });
        assert!(output.contains("Error:"));
        assert!(output.contains("too short"));
        assert!(!output.contains("Output:"));
    }

    #[test]
    fn test_named_fragment_carries_the_name() {
        let output = render(&SequenceReport {
            name: Some("seq1".to_string()),
            body: "ACGT".repeat(10),
            outcome: scored(0.3, None),
        });
        assert!(output.starts_with(">seq1\n"));
    }

    #[test]
    fn test_fragments_concatenate_in_order() {
        let results = PredictionResults {
            reports: vec![
                SequenceReport {
                    name: Some("first".to_string()),
                    body: "ACGT".repeat(10),
                    outcome: scored(0.9, None),
                },
                SequenceReport {
                    name: Some("second".to_string()),
                    body: "ACG".to_string(),
                    outcome: Outcome::Invalid(ValidationError::TooShort { min: 40 }),
                },
            ],
        };

        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        write_results(&mut cursor, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let first = output.find(">first").unwrap();
        let second = output.find(">second").unwrap();
        assert!(first < second);
    }
}
