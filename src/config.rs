// runtime configuration from shuttle secrets, falling back to env vars

use crate::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL};
use std::time::Duration;
use tracing::{info, warn};

pub const GEMINI_API_KEY: &str = "GOOGLE_GENERATIVE_AI_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const API_TIMEOUT_SECONDS: &str = "API_TIMEOUT_SECONDS";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Which hosted model, if any, drafts strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelProvider {
    Gemini {
        api_key: String,
        model: String,
        base_url: String,
    },
    OpenAi {
        api_key: String,
        model: String,
    },
    /// no credentials: every request uses the template generator
    Template,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub provider: ModelProvider,
    pub timeout: Duration,
}

impl Config {
    /// Reads every setting through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let provider = if let Some(api_key) = get(GEMINI_API_KEY) {
            info!("Gemini API key configured");
            ModelProvider::Gemini {
                api_key,
                model: get(GEMINI_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: get(GEMINI_API_BASE_URL)
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            }
        } else if let Some(api_key) = get(OPENAI_API_KEY) {
            info!("OpenAI API key configured");
            ModelProvider::OpenAi {
                api_key,
                model: get(OPENAI_MODEL).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            }
        } else {
            warn!(
                "Neither {} nor {} is set - strategies will come from templates",
                GEMINI_API_KEY, OPENAI_API_KEY
            );
            ModelProvider::Template
        };

        let timeout_seconds = match get(API_TIMEOUT_SECONDS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(seconds) if seconds > 0 => seconds,
                _ => {
                    warn!(value = %raw, "Ignoring invalid {}", API_TIMEOUT_SECONDS);
                    DEFAULT_TIMEOUT_SECONDS
                }
            },
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Config {
            provider,
            timeout: Duration::from_secs(timeout_seconds),
        }
    }
}
