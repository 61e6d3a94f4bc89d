// ABOUTME: Meal idea generation service orchestrating prompt, completion and validation
// ABOUTME: Performs exactly one completion round trip per request with no retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::sync::Arc;

use fitlyst_core::constants::generation::{API_KEY_ENV_VAR, MAX_OUTPUT_TOKENS, TEMPERATURE};
use fitlyst_core::errors::{AppError, AppResult, ErrorCode};
use fitlyst_core::models::{MealIdea, NutritionTargets};
use fitlyst_intelligence::parse_meal_ideas;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::llm::prompts::{build_meal_ideas_prompt, get_meal_ideas_system_prompt};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Generates meal ideas for a set of daily targets
///
/// Business rules:
/// - The credential is checked before the payload, so a missing key is
///   reported even for a malformed request
/// - No completion is requested unless both checks pass
/// - One completion per call; a malformed answer fails the call
#[derive(Clone)]
pub struct MealIdeaService {
    provider: Arc<dyn LlmProvider>,
}

impl MealIdeaService {
    /// Create a service backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate meal ideas from an untrusted nutrition payload
    ///
    /// # Errors
    ///
    /// - `ConfigMissing` when the provider has no API key
    /// - `InvalidInput` when `calories` or `protein` is not a number
    /// - upstream errors from the provider, unchanged
    /// - `ResponseParseFailed` when the completion is not a valid meal list
    pub async fn generate(&self, nutrition: &Value) -> AppResult<Vec<MealIdea>> {
        self.ensure_credentials()?;
        let targets = NutritionTargets::from_payload(nutrition)?;
        self.request_ideas(&targets).await
    }

    /// Generate meal ideas for already-typed targets
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`], minus payload validation.
    pub async fn generate_for_targets(&self, targets: &NutritionTargets) -> AppResult<Vec<MealIdea>> {
        self.ensure_credentials()?;
        self.request_ideas(targets).await
    }

    fn ensure_credentials(&self) -> AppResult<()> {
        if self.provider.has_credentials() {
            Ok(())
        } else {
            warn!("Meal idea generation requested without {API_KEY_ENV_VAR}");
            Err(AppError::config_missing(format!(
                "{} API key is not configured. Please set {API_KEY_ENV_VAR} environment variable.",
                self.provider.display_name()
            )))
        }
    }

    #[instrument(skip(self), fields(provider = self.provider.name()))]
    async fn request_ideas(&self, targets: &NutritionTargets) -> AppResult<Vec<MealIdea>> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(get_meal_ideas_system_prompt()),
            ChatMessage::user(build_meal_ideas_prompt(targets)),
        ])
        .with_model(self.provider.default_model())
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_OUTPUT_TOKENS);

        let response = self.provider.complete(&request).await?;

        if response.content.is_empty() {
            return Err(AppError::new(
                ErrorCode::ExternalServiceError,
                format!("No response from {}", self.provider.display_name()),
            ));
        }

        let ideas = parse_meal_ideas(&response.content).map_err(|e| {
            warn!("Rejected completion: {e}");
            AppError::from(e)
        })?;

        info!(
            count = ideas.len(),
            tokens = response.usage.map(|u| u.total_tokens),
            "Generated meal ideas"
        );

        Ok(ideas)
    }
}
