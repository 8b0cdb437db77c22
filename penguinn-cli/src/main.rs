//! # PENGUINN CLI - Command-Line G-Quadruplex Predictor
//!
//! A command-line interface for the PENGUINN G-quadruplex prediction pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Score one sequence from a file
//! penguinn -i sequence.txt -s ./scorer.py -m models/model_1_1.h5
//!
//! # Score a FASTA file, one report fragment per record
//! penguinn -i candidates.fa -p fasta -s ./scorer.py -m models/model_1_1.h5 -o report.txt
//!
//! # One sequence per line, single scoring pass (no averaging)
//! penguinn -i lines.txt -p multiline -t 1 -s ./scorer.py
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input file (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-p, --mode <MODE>`: Input mode: single, multiline, or fasta (default: single)
//! - `-s, --scorer <FILE>`: Scorer program hosting the model (required)
//! - `-m, --model <LOCATION>`: Model location passed through to the scorer
//! - `-t, --trials <N>`: Scoring trials per sequence; 1 disables averaging (default: 100)
//! - `--min-size <N>`: Minimum accepted sequence length (default: 40)
//! - `--max-size <N>`: Maximum accepted sequence length (default: 200)
//! - `--timeout <SECS>`: Per-call scorer timeout (default: 30)
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, Command};
use penguinn_core::config::{InputMode, PenguinnConfig, TrialPolicy};
use penguinn_core::output::write_results;
use penguinn_core::scorer::{ProcessScorer, ProcessScorerOptions};
use penguinn_core::*;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

/// Main entry point for the PENGUINN CLI application.
///
/// Parses command-line arguments, loads the scorer subprocess, runs the
/// prediction pipeline, and writes the report.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("penguinn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("G-quadruplex forming potential prediction")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("mode")
                .short('p')
                .long("mode")
                .value_name("MODE")
                .help("Input mode: single, multiline, or fasta")
                .default_value("single"),
        )
        .arg(
            Arg::new("scorer")
                .short('s')
                .long("scorer")
                .value_name("FILE")
                .required(true)
                .help("Scorer program hosting the pre-trained model"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("LOCATION")
                .help("Model location passed through to the scorer"),
        )
        .arg(
            Arg::new("trials")
                .short('t')
                .long("trials")
                .value_name("N")
                .help("Scoring trials per sequence; 1 disables averaging")
                .default_value("100"),
        )
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .value_name("N")
                .help("Minimum accepted sequence length"),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .value_name("N")
                .help("Maximum accepted sequence length"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("Per-call scorer timeout in seconds"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");
    simple_logger::init_with_level(if quiet {
        log::Level::Warn
    } else {
        log::Level::Info
    })?;

    // Parse options
    let mut config = PenguinnConfig {
        input_mode: match matches.get_one::<String>("mode").map(String::as_str) {
            Some("single") | None => InputMode::Single,
            Some("multiline") => InputMode::Multiline,
            Some("fasta") => InputMode::Fasta,
            Some(_) => return Err("Invalid input mode".into()),
        },
        ..Default::default()
    };

    if let Some(min_str) = matches.get_one::<String>("min-size") {
        config.min_size = min_str.parse().map_err(|_| "Invalid minimum size")?;
    }
    if let Some(max_str) = matches.get_one::<String>("max-size") {
        config.max_size = max_str.parse().map_err(|_| "Invalid maximum size")?;
    }
    config.validate()?;

    let trials: usize = matches
        .get_one::<String>("trials")
        .map(String::as_str)
        .unwrap_or("100")
        .parse()
        .map_err(|_| "Invalid trial count")?;
    config.trial_policy = match trials {
        0 => return Err("Trial count must be at least 1".into()),
        1 => TrialPolicy::SingleShot,
        n => TrialPolicy::Averaged { trials: n },
    };

    let mut scorer_options = ProcessScorerOptions::default();
    if let Some(timeout_str) = matches.get_one::<String>("timeout") {
        let secs: u64 = timeout_str.parse().map_err(|_| "Invalid timeout")?;
        scorer_options.timeout = Duration::from_secs(secs);
    }

    let raw = if let Some(input_file) = matches.get_one::<String>("input") {
        fs::read_to_string(input_file)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let scorer = ProcessScorer::load(
        Path::new(matches.get_one::<String>("scorer").ok_or("Missing scorer")?),
        matches.get_one::<String>("model").map(String::as_str),
        &scorer_options,
    )?;

    let predictor = G4Predictor::new(config);
    let results = predictor.predict_text(&raw, &scorer)?;

    // Write output
    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_results(&mut writer, &results)?;
    writer.flush()?;

    if !quiet {
        eprintln!(
            "Prediction complete! Scored {} of {} sequences.",
            results.scored(),
            results.reports.len()
        );
        if results.invalid() > 0 {
            eprintln!(
                "Skipped {} invalid sequence(s) (see report).",
                results.invalid()
            );
        }
        if results.unscored() > 0 {
            eprintln!(
                "{} sequence(s) timed out in the scorer (see report).",
                results.unscored()
            );
        }
    }

    Ok(())
}
