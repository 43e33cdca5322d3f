use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    speech::{entities::SpeechClip, value_objects::SynthesizeSpeechInput},
};

/// Text-to-speech backend. `None` means the backend produced no audio.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(
        &self,
        text: String,
    ) -> impl Future<Output = Result<Option<SpeechClip>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SpeechService: Send + Sync {
    fn synthesize_step(
        &self,
        input: SynthesizeSpeechInput,
    ) -> impl Future<Output = Result<Option<SpeechClip>, CoreError>> + Send;
}
