// ABOUTME: Core data models shared across the Fitlyst workspace
// ABOUTME: Re-exports profile, nutrition and meal idea types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Data models
//!
//! The profile is the mutable onboarding record; [`NutritionResult`] and
//! [`MealIdea`] are immutable values derived from it.

mod meal;
mod nutrition;
mod profile;

pub use meal::{MealIdea, MealMacros, MealType};
pub use nutrition::{NutritionResult, NutritionTargets, INVALID_NUTRITION_MESSAGE};
pub use profile::{
    ActivityLevel, Gender, Goal, GoalPriority, Height, HeightUnit, UserProfile, Weight,
    WeightUnit,
};
