// ABOUTME: Daily nutrition target calculation from an onboarding profile
// ABOUTME: BMI, Mifflin-St Jeor BMR, TDEE, goal-adjusted calories and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Nutrition Calculator Module
//!
//! A pure function from [`UserProfile`] to [`NutritionResult`]. Raw string
//! answers are parsed leniently (anything unparsable is zero), every table
//! comes from the supplied [`NutritionConfig`], and there is no other input,
//! so the same profile always yields the same result.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use fitlyst_core::constants::units::{
    CM_PER_METER, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use fitlyst_core::models::{Gender, Goal, GoalPriority, NutritionResult, UserProfile};
use tracing::debug;

use crate::config::{BmrConfig, GoalAdjustmentConfig};
use crate::units::{height_in_cm, parse_or_zero, round_half_up, round_to_tenth, weight_in_kg};
use crate::NutritionConfig;

/// Calculate the daily nutrition target for a profile
///
/// Steps, in order: normalize height to cm and weight to kg, BMI (one
/// decimal), BMR (whole kcal), TDEE from the unrounded BMR, goal adjustment,
/// then protein and fat anchored to bodyweight with carbs taking whatever
/// calories remain. Carbs are not clamped and can be negative.
#[must_use]
pub fn calculate_nutrition(profile: &UserProfile, config: &NutritionConfig) -> NutritionResult {
    let height_cm = height_in_cm(&profile.height);
    let weight_kg = weight_in_kg(&profile.weight);
    let age = parse_or_zero(&profile.age);

    let bmi = calculate_bmi(weight_kg, height_cm);
    let bmr = calculate_bmr(weight_kg, height_cm, age, profile.gender, &config.bmr);
    let tdee = bmr * config.activity_factors.multiplier(profile.activity_level);
    let calories = round_half_up(adjust_for_goal(
        tdee,
        profile.goal,
        profile.goal_priority,
        &config.goal_adjustments,
    ));

    let protein = round_half_up(weight_kg * config.macros.protein_g_per_kg);
    let fat = round_half_up(weight_kg * config.macros.fat_g_per_kg);
    let protein_kcal = protein * KCAL_PER_G_PROTEIN;
    let fat_kcal = fat * KCAL_PER_G_FAT;
    let carbs = round_half_up((calories - protein_kcal - fat_kcal) / KCAL_PER_G_CARBS);

    debug!(
        height_cm,
        weight_kg, bmi, bmr, tdee, calories, "calculated nutrition target"
    );

    NutritionResult {
        calories: calories as i64,
        protein: protein as i64,
        carbs: carbs as i64,
        fat: fat as i64,
        bmi,
        bmr: round_half_up(bmr) as i64,
    }
}

/// Body mass index rounded to one decimal
///
/// A zero height yields a non-finite quotient, reported as 0.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    let bmi = weight_kg / (height_m * height_m);
    if bmi.is_finite() {
        round_to_tenth(bmi)
    } else {
        0.0
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men and unset: +5
/// - Women: -161
///
/// Returned unrounded; callers round for display only.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Option<Gender>,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age;

    let gender_constant = match gender {
        Some(Gender::Female) => config.msj_female_constant,
        Some(Gender::Male) | None => config.msj_male_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Apply the goal's surplus or deficit to TDEE; no goal means maintenance
#[must_use]
pub fn adjust_for_goal(
    tdee: f64,
    goal: Option<Goal>,
    priority: Option<GoalPriority>,
    config: &GoalAdjustmentConfig,
) -> f64 {
    match goal {
        Some(Goal::Bulk) => tdee + config.bulk_surplus.pick(priority),
        Some(Goal::Cut) => tdee - config.cut_deficit.pick(priority),
        None => tdee,
    }
}
