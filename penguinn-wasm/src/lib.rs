use penguinn_core::config::{InputMode, PenguinnConfig, TrialPolicy};
use penguinn_core::engine::G4Predictor;
use penguinn_core::output::write_results;
use penguinn_core::scorer::{Scorer, ScorerError};
use penguinn_core::sequence::encoded::OneHotSequence;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
pub struct WasmPenguinnOptions {
    pub mode: String,    // "single", "multiline", or "fasta"
    pub trials: usize,   // 1 disables averaging
    pub min_size: usize, // Minimum accepted sequence length
    pub max_size: usize, // Maximum accepted sequence length
}

impl Default for WasmPenguinnOptions {
    fn default() -> Self {
        let defaults = PenguinnConfig::default();
        Self {
            mode: "single".to_string(),
            trials: defaults.trial_policy.trials(),
            min_size: defaults.min_size,
            max_size: defaults.max_size,
        }
    }
}

#[wasm_bindgen]
pub struct PenguinnResult {
    report: String,
    scored_count: usize,
    skipped_count: usize,
}

#[wasm_bindgen]
impl PenguinnResult {
    #[wasm_bindgen(getter)]
    pub fn report(&self) -> String {
        self.report.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn scored_count(&self) -> usize {
        self.scored_count
    }

    #[wasm_bindgen(getter)]
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }
}

/// A model hosted on the JavaScript side, typically TensorFlow.js.
///
/// The callback receives the flattened one-hot encoding as a `Float32Array`
/// plus the position count, and returns the probability as a `Number`.
struct JsScorer {
    callback: js_sys::Function,
}

impl Scorer for JsScorer {
    fn predict(&self, encoding: &OneHotSequence) -> Result<f64, ScorerError> {
        let data = js_sys::Float32Array::from(encoding.data());
        let positions = JsValue::from_f64(encoding.positions() as f64);
        let value = self
            .callback
            .call2(&JsValue::NULL, &data.into(), &positions)
            .map_err(|e| ScorerError::Protocol(format!("scorer callback threw: {e:?}")))?;

        let probability = value.as_f64().ok_or_else(|| {
            ScorerError::Protocol("scorer callback returned a non-numeric score".to_string())
        })?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ScorerError::Protocol(format!(
                "score {probability} outside [0, 1]"
            )));
        }
        Ok(probability)
    }
}

#[wasm_bindgen]
pub fn predict_sequences(
    input: &str,
    options_js: JsValue,
    scorer_js: js_sys::Function,
) -> Result<PenguinnResult, JsValue> {
    // Parse options from JavaScript
    let wasm_options: WasmPenguinnOptions =
        serde_wasm_bindgen::from_value(options_js).unwrap_or_default();

    let input_mode = match wasm_options.mode.as_str() {
        "single" => InputMode::Single,
        "multiline" => InputMode::Multiline,
        "fasta" => InputMode::Fasta,
        _ => return Err(JsValue::from_str("Invalid input mode")),
    };
    let trial_policy = match wasm_options.trials {
        0 => return Err(JsValue::from_str("Trial count must be at least 1")),
        1 => TrialPolicy::SingleShot,
        n => TrialPolicy::Averaged { trials: n },
    };

    let config = PenguinnConfig {
        input_mode,
        min_size: wasm_options.min_size,
        max_size: wasm_options.max_size,
        trial_policy,
        ..Default::default()
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Run the prediction pipeline
    let predictor = G4Predictor::new(config);
    let scorer = JsScorer {
        callback: scorer_js,
    };
    let results = predictor
        .predict_text(input, &scorer)
        .map_err(|e| JsValue::from_str(&format!("Prediction error: {e}")))?;

    // Render the report
    let mut report = Vec::new();
    write_results(&mut report, &results)
        .map_err(|e| JsValue::from_str(&format!("Output error: {e}")))?;
    let report = String::from_utf8(report)
        .map_err(|e| JsValue::from_str(&format!("UTF-8 error: {e}")))?;

    let scored_count = results.scored();
    let skipped_count = results.skipped();

    Ok(PenguinnResult {
        report,
        scored_count,
        skipped_count,
    })
}
