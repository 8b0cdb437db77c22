use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    DEFAULT_SCORER_LOAD_RETRIES, DEFAULT_SCORER_TIMEOUT_SECS, SCORER_READY_TOKEN,
};
use crate::scorer::{Scorer, ScorerError};
use crate::sequence::encoded::OneHotSequence;

/// One scoring request on the wire: the tensor shape and its flat data.
#[derive(Serialize)]
struct PredictRequest<'a> {
    shape: [usize; 3],
    data: &'a [f32],
}

/// Options controlling how the scorer subprocess is loaded and called.
#[derive(Debug, Clone)]
pub struct ProcessScorerOptions {
    /// Per-call (and handshake) timeout
    pub timeout: Duration,
    /// Extra load attempts after a failed spawn or handshake.
    ///
    /// Retries cover transient startup failures only; scoring calls are
    /// never retried.
    pub load_retries: usize,
}

impl Default for ProcessScorerOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_SCORER_TIMEOUT_SECS),
            load_retries: DEFAULT_SCORER_LOAD_RETRIES,
        }
    }
}

/// Pipe ends shared between scoring calls.
///
/// `stale_responses` counts answers still owed for requests abandoned by a
/// timeout. Responses arrive strictly in request order, so skipping exactly
/// that many lines realigns the channel before the next request is sent.
struct ScorerChannel {
    stdin: ChildStdin,
    responses: Receiver<std::io::Result<String>>,
    stale_responses: usize,
}

/// A pre-trained model hosted in a subprocess.
///
/// The scorer program is spawned once per run with the model location as its
/// argument. Protocol, line-oriented over stdin/stdout:
///
/// 1. the program prints `ready` once its model is loaded
/// 2. each request is one JSON line `{"shape":[1,L,4],"data":[...]}`
/// 3. each response is one line holding a float in `[0, 1]`
///
/// A call that times out leaves its answer owed by the subprocess; the next
/// call discards exactly that many response lines before sending, so an
/// answer is never paired with a later request's encoding.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use penguinn_core::scorer::{ProcessScorer, ProcessScorerOptions};
///
/// let scorer = ProcessScorer::load(
///     Path::new("./scorer.py"),
///     Some("models/model_1_1.h5"),
///     &ProcessScorerOptions::default(),
/// )?;
/// # Ok::<(), penguinn_core::scorer::ScorerError>(())
/// ```
pub struct ProcessScorer {
    child: Child,
    channel: Mutex<ScorerChannel>,
    timeout: Duration,
}

impl ProcessScorer {
    /// Spawns the scorer program and waits for its ready handshake.
    ///
    /// Failed spawns and handshakes are retried up to
    /// [`ProcessScorerOptions::load_retries`] times.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError::Unavailable`] when all attempts fail.
    pub fn load(
        program: &Path,
        model: Option<&str>,
        options: &ProcessScorerOptions,
    ) -> Result<Self, ScorerError> {
        let mut last_error = ScorerError::Unavailable("scorer was never started".to_string());
        for attempt in 0..=options.load_retries {
            if attempt > 0 {
                log::warn!("Retrying scorer load (attempt {})", attempt + 1);
            }
            match Self::spawn(program, model, options.timeout) {
                Ok(scorer) => {
                    log::info!("Scorer ready: {}", program.display());
                    return Ok(scorer);
                }
                Err(error) => last_error = error,
            }
        }
        Err(last_error)
    }

    fn spawn(program: &Path, model: Option<&str>, timeout: Duration) -> Result<Self, ScorerError> {
        let mut command = Command::new(program);
        if let Some(model) = model {
            command.arg(model);
        }
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ScorerError::Unavailable(format!("failed to start {}: {e}", program.display()))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ScorerError::Unavailable("scorer stdin not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ScorerError::Unavailable("scorer stdout not captured".to_string()))?;

        // The reader thread owns stdout so scoring calls can time out on the
        // channel instead of blocking on the pipe.
        let (sender, responses) = mpsc::channel();
        thread::spawn(move || {
            let reader = BufReader::new(stdout);
            for line in reader.lines() {
                if sender.send(line).is_err() {
                    break;
                }
            }
        });

        match responses.recv_timeout(timeout) {
            Ok(Ok(line)) if line.trim() == SCORER_READY_TOKEN => {}
            Ok(Ok(line)) => {
                let _ = child.kill();
                return Err(ScorerError::Unavailable(format!(
                    "unexpected handshake line: {line:?}"
                )));
            }
            Ok(Err(error)) => {
                let _ = child.kill();
                return Err(ScorerError::Unavailable(format!(
                    "scorer startup failed: {error}"
                )));
            }
            Err(_) => {
                let _ = child.kill();
                return Err(ScorerError::Unavailable(
                    "timed out waiting for the scorer to load its model".to_string(),
                ));
            }
        }

        Ok(Self {
            child,
            channel: Mutex::new(ScorerChannel {
                stdin,
                responses,
                stale_responses: 0,
            }),
            timeout,
        })
    }
}

impl Scorer for ProcessScorer {
    fn predict(&self, encoding: &OneHotSequence) -> Result<f64, ScorerError> {
        let request = PredictRequest {
            shape: encoding.shape(),
            data: encoding.data(),
        };

        let mut channel = self
            .channel
            .lock()
            .map_err(|_| ScorerError::Protocol("scorer channel poisoned".to_string()))?;

        // Discard answers owed to requests abandoned by earlier timeouts, or
        // a late line would be paired with the wrong encoding.
        while channel.stale_responses > 0 {
            match channel.responses.recv_timeout(self.timeout) {
                Ok(Ok(_)) => channel.stale_responses -= 1,
                Ok(Err(error)) => return Err(ScorerError::Io(error)),
                Err(RecvTimeoutError::Timeout) => return Err(ScorerError::Timeout(self.timeout)),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(ScorerError::Protocol(
                        "scorer closed its output stream".to_string(),
                    ))
                }
            }
        }

        serde_json::to_writer(&mut channel.stdin, &request)
            .map_err(|e| ScorerError::Protocol(format!("failed to encode request: {e}")))?;
        channel.stdin.write_all(b"\n")?;
        channel.stdin.flush()?;

        let line = match channel.responses.recv_timeout(self.timeout) {
            Ok(line) => line?,
            Err(RecvTimeoutError::Timeout) => {
                channel.stale_responses += 1;
                return Err(ScorerError::Timeout(self.timeout));
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(ScorerError::Protocol(
                    "scorer closed its output stream".to_string(),
                ))
            }
        };

        let probability: f64 = line.trim().parse().map_err(|_| {
            ScorerError::Protocol(format!("scorer returned a non-numeric score: {line:?}"))
        })?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ScorerError::Protocol(format!(
                "score {probability} outside [0, 1]"
            )));
        }
        Ok(probability)
    }
}

impl Drop for ProcessScorer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
