use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use forkframe_core::domain::common::{ForkframeConfig, LLMConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "forkframe-api", version, about = "Forkframe recipe studio API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix applied to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Page that share links point at when the client sends no base URL
    #[arg(
        long = "share-base-url",
        env = "SHARE_BASE_URL",
        default_value = "http://localhost:5173/"
    )]
    pub share_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-chat-model", env = "GEMINI_CHAT_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_chat_model: String,

    #[arg(
        long = "gemini-tts-model",
        env = "GEMINI_TTS_MODEL",
        default_value = "gemini-2.5-flash-preview-tts"
    )]
    pub gemini_tts_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Directory holding one saved-recipe file per device
    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ForkframeConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_chat_model: args.llm.gemini_chat_model,
                gemini_tts_model: args.llm.gemini_tts_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            storage: StorageConfig {
                data_dir: args.storage.data_dir,
            },
        }
    }
}
