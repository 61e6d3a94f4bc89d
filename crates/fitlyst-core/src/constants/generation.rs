// ABOUTME: Defaults for the meal-idea completion request
// ABOUTME: Model id, sampling temperature, output ceiling and accepted meal count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

/// Default model used for meal-idea generation
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Sampling temperature: varied but plausible suggestions
pub const TEMPERATURE: f32 = 0.7;

/// Output-token ceiling, sized for multi-step instructions across five meals
pub const MAX_OUTPUT_TOKENS: u32 = 2500;

/// Fewest meals the prompt asks for
pub const MIN_MEAL_IDEAS: usize = 3;

/// Most meals the prompt asks for
pub const MAX_MEAL_IDEAS: usize = 5;

/// Environment variable holding the completion-service credential
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Service name used in upstream error messages
pub const SERVICE_NAME: &str = "OpenAI";
