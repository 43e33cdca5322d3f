use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    chat::entities::{ChatReply, ChatSource},
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{ports::LLMClient, prompts::build_speech_prompt},
    speech::{entities::SpeechClip, ports::SpeechSynthesizer},
};

const SPEECH_VOICE: &str = "Zephyr";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    chat_model: String,
    tts_model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    inline_data: Option<InlineDataResponse>,
}

#[derive(Debug, Deserialize)]
struct InlineDataResponse {
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

impl GeminiResponse {
    fn parts(&self) -> impl Iterator<Item = &PartResponse> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|c| c.parts.iter())
    }

    fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    fn audio(&self) -> Option<&str> {
        self.parts()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| d.data.as_str())
    }

    fn sources(&self) -> Vec<ChatSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        let uri = web.uri.clone()?;
                        Some(ChatSource {
                            title: web.title.clone().unwrap_or_else(|| uri.clone()),
                            uri,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            chat_model: config.gemini_chat_model,
            tts_model: config.gemini_tts_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_gemini_api<T: DeserializeOwned>(
        &self,
        model: &str,
        request: GeminiRequest,
    ) -> Result<T, CoreError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model, "Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(model, "Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!(model, "Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }

    fn text_of(response: GeminiResponse) -> Result<String, CoreError> {
        response
            .text()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn text_request(prompt: String) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![Part::Text { text: prompt }],
        }],
        generation_config: None,
        tools: None,
    }
}

fn speech_request(text: &str) -> GeminiRequest {
    GeminiRequest {
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            speech_config: Some(serde_json::json!({
                "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": SPEECH_VOICE } }
            })),
            ..Default::default()
        }),
        ..text_request(build_speech_prompt(text))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        temperature: Option<f32>,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64_image,
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature,
                ..Default::default()
            }),
            tools: None,
        };

        Self::text_of(self.call_gemini_api(&self.model_name, request).await?)
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema),
                ..Default::default()
            }),
            ..text_request(prompt)
        };

        Self::text_of(self.call_gemini_api(&self.model_name, request).await?)
    }

    async fn generate_grounded(&self, prompt: String) -> Result<ChatReply, CoreError> {
        let request = GeminiRequest {
            tools: Some(vec![Tool {
                google_search: serde_json::json!({}),
            }]),
            ..text_request(prompt)
        };

        let response: GeminiResponse = self.call_gemini_api(&self.chat_model, request).await?;
        let sources = response.sources();

        Ok(ChatReply {
            text: Self::text_of(response)?,
            sources,
        })
    }
}

impl SpeechSynthesizer for GeminiLLMClient {
    async fn synthesize(&self, text: String) -> Result<Option<SpeechClip>, CoreError> {
        let response: GeminiResponse = self
            .call_gemini_api(&self.tts_model, speech_request(&text))
            .await?;

        let Some(data) = response.audio() else {
            return Ok(None);
        };

        let pcm = general_purpose::STANDARD.decode(data).map_err(|e| {
            tracing::error!("Speech payload is not valid base64: {}", e);
            CoreError::ExternalServiceError("Invalid audio payload".to_string())
        })?;

        Ok(Some(SpeechClip::new(Bytes::from(pcm))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_request_shape() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: "AAAA".to_string(),
                        },
                    },
                    Part::Text {
                        text: "List ingredients".to_string(),
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.4),
                ..Default::default()
            }),
            tools: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(value["contents"][0]["parts"][1]["text"], "List ingredients");
        assert!((value["generationConfig"]["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn test_speech_request_shape() {
        let value = serde_json::to_value(speech_request("Boil water")).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "Chef voice: Boil water");
        assert_eq!(value["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            value["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"],
            "Zephyr"
        );
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_grounded_response_parsing() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Basil is " }, { "text": "an herb." }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://example.com/basil", "title": "Basil" } },
                        { "web": { "uri": "https://example.com/untitled" } },
                        { "retrievedContext": {} }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Basil is an herb."));
        assert_eq!(
            response.sources(),
            vec![
                ChatSource {
                    uri: "https://example.com/basil".to_string(),
                    title: "Basil".to_string(),
                },
                ChatSource {
                    uri: "https://example.com/untitled".to_string(),
                    title: "https://example.com/untitled".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_audio_response_parsing() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "audio/pcm", "data": "AAD/fw==" } }] }
            }]
        }))
        .unwrap();

        assert_eq!(response.audio(), Some("AAD/fw=="));
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_empty_response() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
        assert!(response.audio().is_none());
        assert!(response.sources().is_empty());
        assert!(GeminiLLMClient::text_of(response).is_err());
    }
}
