use axum::extract::State;
use base64::{Engine as _, engine::general_purpose};
use forkframe_core::domain::speech::{
    entities::SpeechClip, ports::SpeechService, value_objects::SynthesizeSpeechInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    speech::validators::SynthesizeSpeechValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeSpeechResponse {
    /// Base64 of little-endian signed 16-bit PCM
    pub audio: String,
    pub encoding: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_secs: f64,
}

impl From<SpeechClip> for SynthesizeSpeechResponse {
    fn from(clip: SpeechClip) -> Self {
        Self {
            audio: general_purpose::STANDARD.encode(&clip.pcm),
            encoding: "pcm_s16le".to_string(),
            sample_rate: clip.sample_rate,
            channels: clip.channels,
            duration_secs: clip.duration_secs(),
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "speech",
    summary = "Read a cooking step aloud",
    description = "Synthesizes speech for one instruction. Answers 204 when there is nothing to play.",
    responses(
        (status = 200, body = SynthesizeSpeechResponse),
        (status = 204, description = "No audio produced"),
        (status = 502, description = "Speech backend failed")
    ),
    request_body = SynthesizeSpeechValidator
)]
pub async fn synthesize_speech(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SynthesizeSpeechValidator>,
) -> Result<Response<SynthesizeSpeechResponse>, ApiError> {
    let clip = state
        .service
        .synthesize_step(SynthesizeSpeechInput { text: payload.text })
        .await
        .map_err(ApiError::from)?;

    Ok(match clip {
        Some(clip) => Response::OK(SynthesizeSpeechResponse::from(clip)),
        None => Response::NoContent,
    })
}
