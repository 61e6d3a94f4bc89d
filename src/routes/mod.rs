// ABOUTME: Route module organization for the Fitlyst HTTP API
// ABOUTME: One container per domain, each exposing a routes() constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! HTTP routes
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer or to the pure logic crates.

/// Health check routes
pub mod health;
/// Meal idea generation routes
pub mod meal_ideas;
/// Nutrition calculation routes
pub mod nutrition;
/// Onboarding questionnaire routes
pub mod onboarding;

pub use health::HealthRoutes;
pub use meal_ideas::{GenerateMealIdeasResponse, MealIdeaRoutes};
pub use nutrition::{CalculateNutritionRequest, CalculateNutritionResponse, NutritionRoutes};
pub use onboarding::{OnboardingRoutes, OnboardingStepsResponse, StepView};
