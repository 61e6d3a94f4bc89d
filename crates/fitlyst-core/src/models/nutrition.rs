// ABOUTME: Daily nutrition target derived from a user profile
// ABOUTME: NutritionResult from the calculator and NutritionTargets from requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Daily nutrition target
///
/// Energy and macro fields are whole numbers; `bmi` keeps one decimal.
/// `carbs` may be negative for extreme profiles and is reported unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Goal-adjusted daily calories (kcal)
    pub calories: i64,
    /// Protein (g)
    pub protein: i64,
    /// Carbohydrates (g)
    pub carbs: i64,
    /// Fat (g)
    pub fat: i64,
    /// Body mass index (kg/m²), one decimal
    pub bmi: f64,
    /// Basal metabolic rate (kcal)
    pub bmr: i64,
}

/// Daily macro targets a meal plan should roughly add up to
///
/// This is the request-side view of a [`NutritionResult`]: it arrives from
/// clients as JSON, so values are plain floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl NutritionTargets {
    /// Read targets from an untrusted request payload
    ///
    /// `calories` and `protein` must be JSON numbers. `carbs` and `fat` are
    /// used when numeric and default to 0 otherwise.
    ///
    /// # Errors
    ///
    /// Returns an input error if `calories` or `protein` is missing or not a number.
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        let field = |name: &str| payload.get(name).and_then(Value::as_f64);

        match (field("calories"), field("protein")) {
            (Some(calories), Some(protein)) => Ok(Self {
                calories,
                protein,
                carbs: field("carbs").unwrap_or(0.0),
                fat: field("fat").unwrap_or(0.0),
            }),
            _ => Err(AppError::invalid_input(INVALID_NUTRITION_MESSAGE)),
        }
    }
}

impl From<NutritionResult> for NutritionTargets {
    fn from(result: NutritionResult) -> Self {
        Self {
            calories: result.calories as f64,
            protein: result.protein as f64,
            carbs: result.carbs as f64,
            fat: result.fat as f64,
        }
    }
}

/// Message returned when the nutrition payload is unusable
pub const INVALID_NUTRITION_MESSAGE: &str = "Invalid nutrition data provided";
