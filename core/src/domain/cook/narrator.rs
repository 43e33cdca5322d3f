//! Step narration for cook mode, driven by the browser client rather than the
//! HTTP API, which only exposes single-step synthesis.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::domain::{
    common::entities::app_errors::CoreError,
    speech::{entities::SpeechClip, ports::SpeechSynthesizer},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Narration {
    Ready { step: usize, clip: SpeechClip },
    /// The synthesizer produced nothing for this step
    Silent { step: usize },
    Cancelled { step: usize },
}

#[derive(Debug, Default)]
struct InFlight {
    generation: u64,
    token: Option<CancellationToken>,
}

/// Reads cook-mode steps aloud, one at a time.
///
/// Starting a narration cancels whichever one is still running. Cancellation
/// is advisory: a synthesis request already on the wire is abandoned, not
/// aborted upstream.
pub struct Narrator<S> {
    synthesizer: Arc<S>,
    in_flight: Mutex<InFlight>,
}

impl<S> Narrator<S>
where
    S: SpeechSynthesizer,
{
    pub fn new(synthesizer: Arc<S>) -> Self {
        Self {
            synthesizer,
            in_flight: Mutex::new(InFlight::default()),
        }
    }

    pub async fn narrate(&self, step: usize, text: &str) -> Result<Narration, CoreError> {
        let (generation, token) = self.begin();

        let text = text.trim();
        if text.is_empty() {
            self.finish(generation);
            return Ok(Narration::Silent { step });
        }

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(step, "Narration cancelled");
                return Ok(Narration::Cancelled { step });
            }
            result = self.synthesizer.synthesize(text.to_string()) => result,
        };

        self.finish(generation);

        // The step may have changed while the last bytes were arriving.
        if token.is_cancelled() {
            return Ok(Narration::Cancelled { step });
        }

        Ok(match result? {
            Some(clip) => Narration::Ready { step, clip },
            None => Narration::Silent { step },
        })
    }

    /// Cancels the running narration, if any.
    pub fn stop(&self) {
        if let Some(token) = self.lock().token.take() {
            token.cancel();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.lock().token.is_some()
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let mut in_flight = self.lock();
        if let Some(previous) = in_flight.token.take() {
            previous.cancel();
        }

        let token = CancellationToken::new();
        in_flight.generation += 1;
        in_flight.token = Some(token.clone());

        (in_flight.generation, token)
    }

    fn finish(&self, generation: u64) {
        let mut in_flight = self.lock();
        if in_flight.generation == generation {
            in_flight.token = None;
        }
    }

    fn lock(&self) -> MutexGuard<'_, InFlight> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
