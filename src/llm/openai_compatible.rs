// ABOUTME: OpenAI-compatible chat completion provider over HTTPS
// ABOUTME: Bearer-authenticated requests, timeouts and upstream error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! # `OpenAI`-Compatible Provider
//!
//! Talks to any endpoint implementing the `OpenAI` chat completions API.
//!
//! ## Configuration
//!
//! - `OPENAI_API_KEY`: API key (required for generation, checked per request)
//! - `FITLYST_LLM_BASE_URL`: Base URL (default: <https://api.openai.com/v1>)
//! - `FITLYST_LLM_MODEL`: Model to use (default: `gpt-4o-mini`)
//! - `FITLYST_LLM_TIMEOUT_SECS`: Request timeout (default: 60)

use std::time::Duration;

use async_trait::async_trait;
use fitlyst_core::constants::generation::SERVICE_NAME;
use fitlyst_core::errors::AppError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::LlmConfig;

/// Connection timeout toward the API host
const CONNECT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: String,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// API key; requests are refused locally while this is `None`
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl From<&LlmConfig> for OpenAiCompatibleConfig {
    fn from(config: &LlmConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            default_model: config.model.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Initializing {SERVICE_NAME} provider: base_url={}, model={}, api_key={}",
            config.base_url,
            config.default_model,
            if config.api_key.is_some() {
                "configured"
            } else {
                "missing"
            }
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    /// Log message sizes, never their content beyond a short preview
    fn log_messages_debug(messages: &[OpenAiMessage]) {
        for (i, msg) in messages.iter().enumerate() {
            debug!(
                "Message[{i}] role={}, content_len={}",
                msg.role,
                msg.content.len()
            );
        }
        if let Some(system) = messages.iter().find(|m| m.role == "system") {
            debug!(
                "System prompt preview: {}...",
                system.content.chars().take(120).collect::<String>()
            );
        }
    }

    /// Parse error response from API
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());
            match status.as_u16() {
                401 | 403 => AppError::external_service(
                    SERVICE_NAME,
                    format!(
                        "API authentication failed: {}",
                        error_response.error.message
                    ),
                ),
                429 => AppError::external_service(
                    SERVICE_NAME,
                    Self::extract_rate_limit_message(&error_response.error.message),
                ),
                503 => AppError::external_unavailable(SERVICE_NAME, error_response.error.message),
                _ => AppError::external_service(
                    SERVICE_NAME,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            match status.as_u16() {
                502..=504 => AppError::external_unavailable(
                    SERVICE_NAME,
                    format!("Service is not responding ({status})"),
                ),
                _ => AppError::external_service(
                    SERVICE_NAME,
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Extract a user-friendly rate limit message
    ///
    /// OpenAI-style rate limit errors may include "try again in X" hints.
    fn extract_rate_limit_message(message: &str) -> String {
        let lower = message.to_lowercase();
        if let Some(retry_pos) = lower.find("try again in ") {
            let after_prefix = &lower[retry_pos + "try again in ".len()..];
            let end_pos = after_prefix
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(after_prefix.len());
            if let Ok(seconds) = after_prefix[..end_pos].parse::<f64>() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let seconds_int = seconds.ceil() as u64;
                return format!("Rate limit reached. Please try again in {seconds_int} seconds.");
            }
        }
        "Rate limit reached. Please wait a moment and try again.".to_owned()
    }

    /// Map a transport failure into an upstream error
    fn send_error(&self, e: &reqwest::Error) -> AppError {
        error!("Failed to send request to {SERVICE_NAME}: {e}");
        if e.is_connect() {
            AppError::external_unavailable(
                SERVICE_NAME,
                format!("Cannot connect to {}", self.config.base_url),
            )
        } else if e.is_timeout() {
            AppError::external_unavailable(SERVICE_NAME, "Request timed out")
        } else {
            AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        SERVICE_NAME
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    fn has_credentials(&self) -> bool {
        self.config.api_key.is_some()
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let messages: Vec<OpenAiMessage> = request.messages.iter().map(OpenAiMessage::from).collect();
        Self::log_messages_debug(&messages);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {e}");
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {e}");
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from {SERVICE_NAME}: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
