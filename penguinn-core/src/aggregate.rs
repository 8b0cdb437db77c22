//! Repeated-trial scoring and statistical aggregation.
//!
//! Padding placement is random, so a short sequence's score moves slightly
//! from draw to draw. Averaged mode runs the pad-encode-score cycle N times
//! with independent draws and reduces the results to a mean plus an error
//! margin; single-shot mode keeps the historical one-draw behavior with no
//! margin.

use rand::Rng;

use crate::config::TrialPolicy;
use crate::scorer::{Scorer, ScorerError};
use crate::sequence::encoded::OneHotSequence;
use crate::sequence::padding::pad_sequence;

/// Aggregated scoring result for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    /// Arithmetic mean of the trial probabilities
    pub mean: f64,
    /// Population standard deviation of the trial probabilities
    pub std_dev: f64,
    /// Error margin `2·σ/√(N−1)`, absent in single-shot mode (and for any
    /// degenerate run with fewer than two trials)
    pub margin: Option<f64>,
    /// Number of trials that produced this aggregate
    pub trials: usize,
}

/// Scores one validated sequence under the given trial policy.
///
/// For each trial, a body shorter than `model_size` is freshly padded (an
/// independent random draw per trial), encoded, and handed to the scorer.
/// Bodies already at `model_size` are encoded directly, so all trials see
/// the same encoding.
///
/// # Errors
///
/// Propagates the first [`ScorerError`]; partial trial results are dropped.
pub fn score_sequence<R: Rng>(
    body: &str,
    model_size: usize,
    policy: TrialPolicy,
    scorer: &dyn Scorer,
    rng: &mut R,
) -> Result<AggregateResult, ScorerError> {
    debug_assert!(body.len() <= model_size);

    let trials = policy.trials();
    let mut scores = Vec::with_capacity(trials);
    for _ in 0..trials {
        let encoding = if body.len() < model_size {
            OneHotSequence::from_sequence(&pad_sequence(body, model_size, rng))
        } else {
            OneHotSequence::from_sequence(body)
        };
        scores.push(scorer.predict(&encoding)?);
    }

    Ok(aggregate_scores(&scores, policy))
}

/// Reduces trial probabilities to mean, standard deviation, and margin.
///
/// The margin formula is `2·σ/√(N−1)` with σ the *population* standard
/// deviation. The estimator mix is unconventional but the qualitative
/// thresholds were tuned against exactly this formula, so it stays.
fn aggregate_scores(scores: &[f64], policy: TrialPolicy) -> AggregateResult {
    let trials = scores.len();
    let mean = scores.iter().sum::<f64>() / trials as f64;
    let variance = scores
        .iter()
        .map(|score| (score - mean).powi(2))
        .sum::<f64>()
        / trials as f64;
    let std_dev = variance.sqrt();

    let margin = match policy {
        TrialPolicy::Averaged { .. } if trials > 1 => {
            Some(2.0 * std_dev / ((trials - 1) as f64).sqrt())
        }
        _ => None,
    };

    AggregateResult {
        mean,
        std_dev,
        margin,
        trials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    #[test]
    fn test_constant_scorer_has_zero_spread() {
        let scorer = |_: &OneHotSequence| 0.5;
        let mut rng = StdRng::seed_from_u64(3);
        let result = score_sequence(
            &"ACGT".repeat(10),
            200,
            TrialPolicy::Averaged { trials: 100 },
            &scorer,
            &mut rng,
        )
        .unwrap();

        assert_eq!(result.trials, 100);
        assert!((result.mean - 0.5).abs() < 1e-12);
        assert!(result.std_dev.abs() < 1e-12);
        assert!(result.margin.unwrap() < 1e-12);
    }

    #[test]
    fn test_single_shot_omits_the_margin() {
        let scorer = |_: &OneHotSequence| 0.7;
        let mut rng = StdRng::seed_from_u64(3);
        let result =
            score_sequence("ACGTACGT", 200, TrialPolicy::SingleShot, &scorer, &mut rng).unwrap();

        assert_eq!(result.trials, 1);
        assert!((result.mean - 0.7).abs() < 1e-12);
        assert!(result.margin.is_none());
    }

    #[test]
    fn test_degenerate_averaged_run_omits_the_margin() {
        let scorer = |_: &OneHotSequence| 0.7;
        let mut rng = StdRng::seed_from_u64(3);
        let result = score_sequence(
            "ACGTACGT",
            200,
            TrialPolicy::Averaged { trials: 1 },
            &scorer,
            &mut rng,
        )
        .unwrap();
        assert!(result.margin.is_none());
    }

    #[test]
    fn test_margin_formula() {
        // Two trials at 0.4 and 0.6: mean 0.5, population stddev 0.1,
        // margin 2 * 0.1 / sqrt(1) = 0.2.
        let calls = Cell::new(0usize);
        let scorer = |_: &OneHotSequence| {
            let value = if calls.get() % 2 == 0 { 0.4 } else { 0.6 };
            calls.set(calls.get() + 1);
            value
        };
        let mut rng = StdRng::seed_from_u64(3);
        let result = score_sequence(
            "ACGTACGT",
            200,
            TrialPolicy::Averaged { trials: 2 },
            &scorer,
            &mut rng,
        )
        .unwrap();

        assert!((result.mean - 0.5).abs() < 1e-12);
        assert!((result.std_dev - 0.1).abs() < 1e-12);
        assert!((result.margin.unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_full_length_body_is_not_padded() {
        // Every trial must see the unpadded encoding: 200 known positions.
        let scorer = |encoding: &OneHotSequence| {
            let known: f32 = encoding.data().iter().sum();
            assert_eq!(known, 200.0);
            0.5
        };
        let mut rng = StdRng::seed_from_u64(3);
        let body = "ACGT".repeat(50);
        score_sequence(
            &body,
            200,
            TrialPolicy::Averaged { trials: 10 },
            &scorer,
            &mut rng,
        )
        .unwrap();
    }

    #[test]
    fn test_short_body_is_padded_each_trial() {
        let scorer = |encoding: &OneHotSequence| {
            assert_eq!(encoding.positions(), 200);
            let known: f32 = encoding.data().iter().sum();
            // 40 real nucleotides, 160 zero rows from padding.
            assert_eq!(known, 40.0);
            0.5
        };
        let mut rng = StdRng::seed_from_u64(3);
        let body = "ACGT".repeat(10);
        score_sequence(
            &body,
            200,
            TrialPolicy::Averaged { trials: 10 },
            &scorer,
            &mut rng,
        )
        .unwrap();
    }

    #[test]
    fn test_scorer_error_propagates() {
        struct FailingScorer;
        impl Scorer for FailingScorer {
            fn predict(&self, _: &OneHotSequence) -> Result<f64, ScorerError> {
                Err(ScorerError::Protocol("broken".to_string()))
            }
        }

        let mut rng = StdRng::seed_from_u64(3);
        let result = score_sequence(
            "ACGTACGT",
            200,
            TrialPolicy::Averaged { trials: 5 },
            &FailingScorer,
            &mut rng,
        );
        assert!(matches!(result, Err(ScorerError::Protocol(_))));
    }
}
