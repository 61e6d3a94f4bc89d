// ABOUTME: Calculator configuration module
// ABOUTME: Re-exports the immutable nutrition tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

/// Nutrition tables (BMR coefficients, activity factors, goal ranges, macro ratios)
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieRange, GoalAdjustmentConfig, MacroConfig,
    NutritionConfig,
};
