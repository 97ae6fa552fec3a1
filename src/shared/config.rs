//! Application configuration. Generation backend and keyword matching.

use crate::domain::{DomainError, GenerationLimits, MatchMode};
use serde::Deserialize;
use std::time::Duration;

/// Default endpoint: a local Ollama server's OpenAI-compatible route.
pub const DEFAULT_GEN_API_URL: &str = "http://localhost:11434/v1/chat/completions";
pub const DEFAULT_GEN_MODEL: &str = "llama3.2";
pub const DEFAULT_GEN_TIMEOUT_SECS: u64 = 60;

/// Which generation adapter to wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenBackend {
    OpenAi,
    Mock,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// "openai" or "mock". Read from CARE_CHAT_GEN_BACKEND.
    #[serde(default)]
    pub gen_backend: Option<GenBackend>,

    // ─────────────────────────────────────────────────────────────────────────
    // Generation Backend Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Chat completions endpoint. Read from CARE_CHAT_GEN_API_URL.
    #[serde(default)]
    pub gen_api_url: Option<String>,

    /// API key; optional for local servers. Read from CARE_CHAT_GEN_API_KEY.
    #[serde(default)]
    pub gen_api_key: Option<String>,

    /// Model name. Read from CARE_CHAT_GEN_MODEL.
    #[serde(default)]
    pub gen_model: Option<String>,

    /// Prompt cap in whitespace tokens (default 512). Read from CARE_CHAT_GEN_MAX_INPUT_TOKENS.
    #[serde(default)]
    pub gen_max_input_tokens: Option<usize>,

    /// Reply cap in tokens (default 100). Read from CARE_CHAT_GEN_MAX_OUTPUT_TOKENS.
    #[serde(default)]
    pub gen_max_output_tokens: Option<usize>,

    /// HTTP timeout per generation call (default 60). Read from CARE_CHAT_GEN_TIMEOUT_SECS.
    #[serde(default)]
    pub gen_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────
    /// "substring" (default) or "word". Read from CARE_CHAT_MATCH_MODE.
    #[serde(default)]
    pub match_mode: Option<String>,
}

impl AppConfig {
    /// Environment (`CARE_CHAT_*`, `.env` included) plus an optional file named by CARE_CHAT_CONFIG.
    ///
    /// Any malformed value fails the whole load; callers must not substitute defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var("CARE_CHAT_CONFIG").ok();
        Self::from_sources(file.as_deref(), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("CARE_CHAT").try_parsing(true)
    }

    fn from_sources(
        file: Option<&str>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        // Environment wins over the file.
        c = c.add_source(env);
        c.build()?.try_deserialize()
    }

    /// Explicit backend, else the OpenAI-compatible endpoint (local Ollama by default).
    /// The mock is only used when asked for.
    pub fn gen_backend_or_default(&self) -> GenBackend {
        self.gen_backend.unwrap_or(GenBackend::OpenAi)
    }

    pub fn gen_api_url_or_default(&self) -> String {
        self.gen_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GEN_API_URL.to_string())
    }

    /// API key or empty string (no Authorization header is sent then).
    pub fn gen_api_key_or_default(&self) -> String {
        self.gen_api_key.clone().unwrap_or_default()
    }

    pub fn gen_model_or_default(&self) -> String {
        self.gen_model
            .clone()
            .unwrap_or_else(|| DEFAULT_GEN_MODEL.to_string())
    }

    pub fn gen_timeout(&self) -> Duration {
        Duration::from_secs(self.gen_timeout_secs.unwrap_or(DEFAULT_GEN_TIMEOUT_SECS))
    }

    /// Generation limits with defaults (512 in, 100 out, one candidate).
    pub fn generation_limits(&self) -> GenerationLimits {
        let defaults = GenerationLimits::default();
        GenerationLimits {
            max_input_tokens: self
                .gen_max_input_tokens
                .unwrap_or(defaults.max_input_tokens),
            max_output_tokens: self
                .gen_max_output_tokens
                .unwrap_or(defaults.max_output_tokens),
            candidates: defaults.candidates,
        }
    }

    /// Parsed match mode; `Substring` when unset.
    pub fn match_mode_or_default(&self) -> Result<MatchMode, DomainError> {
        self.match_mode
            .as_deref()
            .map_or(Ok(MatchMode::default()), |s| s.parse::<MatchMode>())
    }
}
