// ABOUTME: Nutrition configuration for the daily target calculation
// ABOUTME: BMR coefficients, activity multipliers, goal calorie ranges and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Nutrition Configuration
//!
//! The calculator never reaches for global tables; every coefficient it uses
//! arrives through a [`NutritionConfig`] value, and `Default` holds the
//! standard values.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use fitlyst_core::models::{ActivityLevel, GoalPriority};
use serde::{Deserialize, Serialize};

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment ranges per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Bodyweight-anchored macro ratios
    pub macros: MacroConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5), also used when gender is unset
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2, also the fallback for an unset level
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub light: f64,
    /// Moderately active: 1.55
    pub moderate: f64,
    /// Very active: 1.725
    pub active: f64,
    /// Extra active: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for a level; unset falls back to sedentary
    #[must_use]
    pub const fn multiplier(&self, level: Option<ActivityLevel>) -> f64 {
        match level {
            Some(ActivityLevel::Light) => self.light,
            Some(ActivityLevel::Moderate) => self.moderate,
            Some(ActivityLevel::Active) => self.active,
            Some(ActivityLevel::VeryActive) => self.very_active,
            Some(ActivityLevel::Sedentary) | None => self.sedentary,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: ActivityLevel::Sedentary.default_multiplier(),
            light: ActivityLevel::Light.default_multiplier(),
            moderate: ActivityLevel::Moderate.default_multiplier(),
            active: ActivityLevel::Active.default_multiplier(),
            very_active: ActivityLevel::VeryActive.default_multiplier(),
        }
    }
}

/// Inclusive kcal range for a goal adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieRange {
    /// Smallest adjustment (conservative)
    pub min: f64,
    /// Largest adjustment (aggressive)
    pub max: f64,
}

impl CalorieRange {
    /// Point in the range selected by the goal priority
    ///
    /// Aggressive takes the maximum, conservative the minimum, and balanced
    /// or unset the midpoint.
    #[must_use]
    pub fn pick(&self, priority: Option<GoalPriority>) -> f64 {
        match priority {
            Some(GoalPriority::Aggressive) => self.max,
            Some(GoalPriority::Conservative) => self.min,
            Some(GoalPriority::Balanced) | None => (self.min + self.max) / 2.0,
        }
    }
}

/// Calorie adjustment ranges per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Surplus added when bulking
    pub bulk_surplus: CalorieRange,
    /// Deficit subtracted when cutting
    pub cut_deficit: CalorieRange,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            bulk_surplus: CalorieRange {
                min: 250.0,
                max: 400.0,
            },
            cut_deficit: CalorieRange {
                min: 300.0,
                max: 500.0,
            },
        }
    }
}

/// Bodyweight-anchored macro ratios; carbs take the remaining calories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Protein grams per kg bodyweight
    pub protein_g_per_kg: f64,
    /// Fat grams per kg bodyweight
    pub fat_g_per_kg: f64,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            fat_g_per_kg: 0.8,
        }
    }
}
