// ABOUTME: Meal-idea response handling for untrusted completion text
// ABOUTME: Payload extraction from fenced blocks and strict schema validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Meal Ideas
//!
//! The completion service returns free text that should contain a JSON array
//! of meals. [`parse_meal_ideas`] finds the payload, checks every element and
//! either returns the whole normalized list or rejects the whole response.

mod extraction;
mod validator;

pub use extraction::extract_payload;
pub use validator::{parse_meal_ideas, MealIdeaParseError, MealIssue};
