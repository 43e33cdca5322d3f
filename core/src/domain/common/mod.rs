use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct ForkframeConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    /// Model used for recipe generation and ingredient recognition
    pub gemini_model: String,
    pub gemini_chat_model: String,
    pub gemini_tts_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}
