// ABOUTME: Integration tests for the meal idea generation round trip
// ABOUTME: Credential and payload checks, request shape and failure propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;
mod helpers;

use fitlyst::llm::prompts::MEAL_IDEAS_SYSTEM_PROMPT;
use fitlyst::llm::MessageRole;
use fitlyst::services::MealIdeaService;
use fitlyst_core::errors::{AppError, ErrorCode};
use fitlyst_core::models::{MealType, NutritionTargets};
use helpers::mock_llm::MockLlmProvider;
use serde_json::json;

const ONE_MEAL: &str = r#"```json
[{"mealType": "lunch", "name": "Turkey Wrap", "macros": {"calories": 550, "protein": 40, "carbs": 45, "fat": 18}}]
```"#;

fn nutrition_payload() -> serde_json::Value {
    json!({ "calories": 2259, "protein": 160, "carbs": 261, "fat": 64 })
}

#[tokio::test]
async fn test_missing_credential_fails_before_any_call() {
    common::init_test_logging();
    let provider = MockLlmProvider::without_credentials();
    let service = MealIdeaService::new(provider.clone());

    let error = service.generate(&nutrition_payload()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert_eq!(
        error.message,
        "OpenAI API key is not configured. Please set OPENAI_API_KEY environment variable."
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_credential_is_checked_before_payload() {
    let provider = MockLlmProvider::without_credentials();
    let service = MealIdeaService::new(provider.clone());

    let error = service.generate(&json!(null)).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_non_numeric_targets_are_rejected_without_a_call() {
    let provider = MockLlmProvider::replying(ONE_MEAL);
    let service = MealIdeaService::new(provider.clone());

    for payload in [
        json!({ "calories": "2000", "protein": 150 }),
        json!({ "protein": 150 }),
        json!({ "calories": 2000 }),
        json!(null),
    ] {
        let error = service.generate(&payload).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.message, "Invalid nutrition data provided");
        assert_eq!(error.http_status(), 400);
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_single_request_carries_prompt_and_generation_settings() {
    let provider = MockLlmProvider::replying(ONE_MEAL);
    let service = MealIdeaService::new(provider.clone());

    let meals = service.generate(&nutrition_payload()).await.unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].meal_type, MealType::Lunch);
    assert_eq!(meals[0].macros.protein, 40.0);
    assert_eq!(provider.calls(), 1);

    let request = provider.last_request().unwrap();
    assert_eq!(request.model.as_deref(), Some("mock-model"));
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.max_tokens, Some(2500));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert_eq!(request.messages[0].content, MEAL_IDEAS_SYSTEM_PROMPT.trim_end());
    assert_eq!(request.messages[1].role, MessageRole::User);
    assert!(request.messages[1].content.contains("- Calories: 2259 kcal"));
    assert!(request.messages[1].content.contains("- Fat: 64 g"));
}

#[tokio::test]
async fn test_optional_macros_default_to_zero_in_prompt() {
    let provider = MockLlmProvider::replying(ONE_MEAL);
    let service = MealIdeaService::new(provider.clone());

    service
        .generate(&json!({ "calories": 1800, "protein": 120 }))
        .await
        .unwrap();

    let prompt = provider.last_request().unwrap().messages[1].content.clone();
    assert!(prompt.contains("- Carbohydrates: 0 g"));
}

#[tokio::test]
async fn test_empty_completion_is_an_upstream_error() {
    let provider = MockLlmProvider::replying("");
    let service = MealIdeaService::new(provider.clone());

    let error = service.generate(&nutrition_payload()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "No response from OpenAI");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_malformed_completion_is_not_retried() {
    let provider = MockLlmProvider::replying(r#"[{"mealType": "lunch", "name": "Soup"}]"#);
    let service = MealIdeaService::new(provider.clone());

    let error = service.generate(&nutrition_payload()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ResponseParseFailed);
    assert_eq!(error.message, "Failed to parse AI response");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_provider_error_propagates_unchanged() {
    let upstream = AppError::external_service("OpenAI", "API returned no choices");
    let provider = MockLlmProvider::failing(&upstream);
    let service = MealIdeaService::new(provider.clone());

    let error = service.generate(&nutrition_payload()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "OpenAI: API returned no choices");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_typed_targets_skip_payload_validation() {
    let provider = MockLlmProvider::replying(ONE_MEAL);
    let service = MealIdeaService::new(provider.clone());

    let targets = NutritionTargets {
        calories: 2000.0,
        protein: 150.0,
        carbs: 200.0,
        fat: 60.0,
    };
    let meals = service.generate_for_targets(&targets).await.unwrap();

    assert_eq!(meals[0].name, "Turkey Wrap");
    assert_eq!(provider.calls(), 1);
}
