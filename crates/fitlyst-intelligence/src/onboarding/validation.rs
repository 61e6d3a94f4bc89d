// ABOUTME: Per-step answer validation for the onboarding flow
// ABOUTME: Pure predicates that gate forward navigation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use fitlyst_core::constants::limits::{MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use fitlyst_core::models::{Height, UserProfile, WeightUnit};

use super::StepKind;
use crate::units::{feet_inches_to_cm, lb_to_kg, parse_number};

/// Whether the profile holds a valid answer for a step of this kind
///
/// All bounds are inclusive. Imperial heights need both feet and inches.
#[must_use]
pub fn validate_step(kind: StepKind, profile: &UserProfile) -> bool {
    match kind {
        StepKind::Height => height_is_valid(&profile.height),
        StepKind::Weight => parse_number(&profile.weight.value).is_some_and(|value| {
            let kg = match profile.weight.unit {
                WeightUnit::Kg => value,
                WeightUnit::Lb => lb_to_kg(value),
            };
            value > 0.0 && kg <= MAX_WEIGHT_KG
        }),
        StepKind::Number => {
            parse_number(&profile.age).is_some_and(|age| age > 0.0 && age <= MAX_AGE_YEARS)
        }
        StepKind::Gender => profile.gender.is_some(),
        StepKind::Select => profile.activity_level.is_some(),
        StepKind::Goal => profile.goal.is_some(),
        StepKind::GoalPriority => profile.goal_priority.is_some(),
    }
}

fn height_is_valid(height: &Height) -> bool {
    match height {
        Height::Cm { value } => {
            parse_number(value).is_some_and(|cm| cm > 0.0 && cm <= MAX_HEIGHT_CM)
        }
        Height::Ft { value, inches } => match (parse_number(value), parse_number(inches)) {
            (Some(feet), Some(inches)) => {
                feet > 0.0 && inches >= 0.0 && feet_inches_to_cm(feet, inches) <= MAX_HEIGHT_CM
            }
            _ => false,
        },
    }
}
