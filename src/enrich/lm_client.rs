//! Chat-completion client for album enrichment.
//!
//! Speaks the OpenAI `chat/completions` protocol over blocking HTTP. The
//! enrichment pipeline only sees the [`CompletionOracle`] trait, so tests
//! and alternative providers can stand in for the real endpoint.
//!
//! No client-side timeout is set: a stalled endpoint stalls the invocation
//! until the process is interrupted.

use super::config::EnrichmentConfig;
use super::payload::ExtractError;
use crate::util::truncate_string;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const RESPONSE_PREVIEW_BYTES: usize = 300;

/// Reasons an enrichment payload could not be obtained.
///
/// None of these are fatal; the pipeline falls back to default values.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("serialize record for prompt: {0}")]
    Prompt(#[source] serde_json::Error),
    #[error("chat request failed: {0}")]
    Transport(#[source] ureq::Error),
    #[error("chat response unreadable: {0}")]
    Decode(#[source] ureq::Error),
    #[error("chat response had no message content")]
    EmptyCompletion,
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// A text-completion endpoint: system + user message in, free text out.
pub trait CompletionOracle {
    fn complete(&self, system: &str, user: &str) -> Result<String, EnrichmentError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible chat client.
pub struct ChatClient {
    agent: ureq::Agent,
    config: EnrichmentConfig,
}

impl ChatClient {
    pub fn new(config: EnrichmentConfig) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

impl CompletionOracle for ChatClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, EnrichmentError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let start = Instant::now();
        let url = self.endpoint();
        let mut response = self
            .agent
            .post(url.as_str())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send_json(&request)
            .map_err(EnrichmentError::Transport)?;
        let completion: ChatCompletion = response
            .body_mut()
            .read_json()
            .map_err(EnrichmentError::Decode)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(EnrichmentError::EmptyCompletion)?;

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis(),
            model = %self.config.model,
            prompt_bytes = user.len(),
            response_bytes = content.len(),
            "lm invoke complete"
        );
        tracing::debug!(
            preview = %truncate_string(&content, RESPONSE_PREVIEW_BYTES),
            "lm reply"
        );

        Ok(content)
    }
}
