// generative model clients: gemini over plain http, openai through a rig agent

use crate::models::CampaignInput;
use crate::prompt::{build_prompt, build_prompt_with_schema, STRATEGIST_PREAMBLE};
use crate::schema::strategy_schema;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use rig::completion::Prompt;
use rig::prelude::*;
use rig::providers::openai;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_MODEL: &str = openai::GPT_4O;

/// A hosted model that can draft a strategy as raw JSON text.
#[async_trait]
pub trait StrategyModel: Send + Sync {
    fn name(&self) -> String;

    /// Returns the model's reply; the caller parses and checks it.
    async fn generate_json(&self, input: &CampaignInput) -> Result<String>;
}

// gemini generateContent wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini with `responseSchema`, so the reply is constrained to the strategy shape.
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(api_key: &str, model: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl StrategyModel for GeminiModel {
    fn name(&self) -> String {
        format!("gemini/{}", self.model)
    }

    async fn generate_json(&self, input: &CampaignInput) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: build_prompt(input),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: strategy_schema(),
            },
        };

        debug!(model = %self.model, "Sending generateContent request");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(300).collect();
            bail!("Gemini returned error status {}: {}", status, preview);
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let candidate = reply
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Gemini returned no candidates"))?;
        let finish_reason = candidate.finish_reason.unwrap_or_default();
        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            bail!("Gemini candidate has no text (finish reason: {finish_reason})");
        }

        info!(
            model = %self.model,
            response_length = text.len(),
            "Gemini response received"
        );
        Ok(text)
    }
}

/// OpenAI chat model driven through a rig agent; the schema travels in the prompt.
pub struct OpenAiModel {
    client: openai::Client,
    model: String,
}

impl OpenAiModel {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl StrategyModel for OpenAiModel {
    fn name(&self) -> String {
        format!("openai/{}", self.model)
    }

    async fn generate_json(&self, input: &CampaignInput) -> Result<String> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(STRATEGIST_PREAMBLE)
            .max_tokens(4096)
            .temperature(0.4)
            .build();

        let prompt = build_prompt_with_schema(input);
        let reply = agent
            .prompt(prompt.as_str())
            .await
            .context("OpenAI agent failed to respond")?;

        info!(
            model = %self.model,
            response_length = reply.len(),
            "OpenAI response received"
        );
        Ok(reply)
    }
}
