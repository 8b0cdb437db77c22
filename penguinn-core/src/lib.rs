//! # PENGUINN - Rust Implementation
//!
//! A Rust implementation of the PENGUINN G-quadruplex prediction pipeline.
//! This library validates, pads, and one-hot encodes DNA/RNA sequences, drives
//! a pre-trained neural model through a pluggable scorer boundary, aggregates
//! repeated stochastic trials, and renders human-readable reports.
//!
//! ## Overview
//!
//! PENGUINN (Precise Exploration of Nuclear G-quadruplexes Using Interpretable
//! Neural Networks) is a convolutional-network classifier for G-quadruplex
//! (G4) forming potential. The model itself is not reimplemented here: scoring
//! goes through the [`scorer::Scorer`] trait, with a line-protocol subprocess
//! host ([`scorer::ProcessScorer`]) as the standard production backend.
//!
//! ## Features
//!
//! - **Three Input Modes**: single sequence, one sequence per line, or FASTA
//! - **Stochastic Padding**: short sequences are N-padded with a random split,
//!   so repeated runs sample the model's sensitivity to padding placement
//! - **Averaged Scoring**: N independent pad-and-score trials reduced to a
//!   mean probability with an error margin
//! - **Skip and Continue**: invalid sequences produce error fragments without
//!   aborting the batch
//!
//! ## Quick Start
//!
//! ```rust
//! use penguinn_core::{G4Predictor, config::PenguinnConfig};
//! use penguinn_core::output::write_results;
//! use penguinn_core::sequence::encoded::OneHotSequence;
//!
//! let predictor = G4Predictor::new(PenguinnConfig::default());
//!
//! // Any closure over the encoding is a scorer; production uses
//! // `scorer::ProcessScorer` instead.
//! let scorer = |_: &OneHotSequence| 0.9;
//!
//! let results = predictor.predict_text(&"GGGTTA".repeat(10), &scorer)?;
//! let mut report = Vec::new();
//! write_results(&mut report, &results)?;
//! # Ok::<(), penguinn_core::types::PenguinnError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Input mode, size limits, and trial policy
//! - [`engine`]: The [`G4Predictor`] pipeline orchestrator
//! - [`batch`]: Splitting raw input text into sequence records
//! - [`sequence`]: Validation, padding, one-hot encoding, FASTA I/O
//! - [`scorer`]: The scorer boundary and the subprocess host
//! - [`aggregate`]: Repeated-trial scoring and statistics
//! - [`results`]: Per-sequence outcomes and run results
//! - [`output`]: Report rendering
//! - [`types`]: Core data types and errors
//!
//! ## Error Handling
//!
//! Per-sequence problems (validation failures, scorer timeouts) are recorded
//! as outcomes inside [`results::PredictionResults`] and never abort a run.
//! Run-level failures return [`Result<T, PenguinnError>`](types::PenguinnError):
//! unparsable batch input, I/O errors, and a broken scorer.

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod scorer;
pub mod sequence;
pub mod types;

pub use engine::G4Predictor;
