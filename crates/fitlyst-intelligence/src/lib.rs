// ABOUTME: Nutrition engine, onboarding state machine and meal-idea validation
// ABOUTME: Pure functions over fitlyst-core models, no network or storage access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

#![deny(unsafe_code)]

//! # Fitlyst Intelligence
//!
//! Everything here is deterministic and synchronous:
//!
//! - **units**: height and weight conversion plus lenient numeric parsing
//! - **config**: immutable nutrition tables passed into the calculator
//! - **`nutrition_calculator`**: profile to daily nutrition target
//! - **onboarding**: step registry and the questionnaire state machine
//! - **`meal_ideas`**: turns untrusted completion text into typed meal ideas

/// Unit conversion and numeric input parsing
pub mod units;

/// Immutable calculator configuration
pub mod config;

/// BMI, BMR, TDEE, goal calories and macro split
pub mod nutrition_calculator;

/// Step registry and onboarding state machine
pub mod onboarding;

/// Completion text extraction and meal-idea validation
pub mod meal_ideas;

pub use config::NutritionConfig;
pub use meal_ideas::{parse_meal_ideas, MealIdeaParseError, MealIssue};
pub use nutrition_calculator::calculate_nutrition;
pub use onboarding::{
    Answer, Onboarding, OnboardingState, StepDefinition, StepKind, UnitChoice, STEPS,
};
