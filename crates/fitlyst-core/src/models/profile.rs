// ABOUTME: User profile collected by the onboarding questionnaire
// ABOUTME: Raw-string measurements plus optional categorical answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Height unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Feet plus inches
    Ft,
}

impl HeightUnit {
    /// Short label shown next to the input
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Ft => "ft",
        }
    }
}

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lb,
}

impl WeightUnit {
    /// Short label shown next to the input
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

/// Height as entered by the user
///
/// The unit is the variant tag, so `inches` only exists for imperial input
/// and a value can never be read under the wrong unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum Height {
    /// Metric height
    Cm {
        /// Centimeters, raw input
        value: String,
    },
    /// Imperial height
    Ft {
        /// Whole feet, raw input
        value: String,
        /// Remaining inches, raw input
        #[serde(default)]
        inches: String,
    },
}

impl Default for Height {
    fn default() -> Self {
        Self::Cm {
            value: String::new(),
        }
    }
}

impl Height {
    /// Metric height from a raw value
    pub fn cm(value: impl Into<String>) -> Self {
        Self::Cm {
            value: value.into(),
        }
    }

    /// Imperial height from raw feet and inches
    pub fn ft(feet: impl Into<String>, inches: impl Into<String>) -> Self {
        Self::Ft {
            value: feet.into(),
            inches: inches.into(),
        }
    }

    /// Active unit
    #[must_use]
    pub const fn unit(&self) -> HeightUnit {
        match self {
            Self::Cm { .. } => HeightUnit::Cm,
            Self::Ft { .. } => HeightUnit::Ft,
        }
    }

    /// Primary raw value (centimeters or feet)
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Cm { value } | Self::Ft { value, .. } => value,
        }
    }

    /// Raw inches, only for imperial heights
    #[must_use]
    pub fn inches(&self) -> Option<&str> {
        match self {
            Self::Cm { .. } => None,
            Self::Ft { inches, .. } => Some(inches),
        }
    }
}

/// Weight as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    /// Raw input
    pub value: String,
    /// Unit the value is expressed in
    pub unit: WeightUnit,
}

impl Weight {
    /// Weight from a raw value and unit
    pub fn new(value: impl Into<String>, unit: WeightUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }
}

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// All options in display order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Habitual activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All options in display order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::Light => "Lightly active (1-3 days/week)",
            Self::Moderate => "Moderately active (3-5 days/week)",
            Self::Active => "Very active (6-7 days/week)",
            Self::VeryActive => "Extra active (physical job or twice-daily training)",
        }
    }

    /// Standard TDEE multiplier for this level
    #[must_use]
    pub const fn default_multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Gain mass with a calorie surplus
    Bulk,
    /// Lose fat with a calorie deficit
    Cut,
}

impl Goal {
    /// All options in display order
    pub const ALL: [Self; 2] = [Self::Bulk, Self::Cut];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Cut => "cut",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bulk => "Bulk",
            Self::Cut => "Cut",
        }
    }

    /// One-line explanation shown under the label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bulk => "Build muscle with a calorie surplus",
            Self::Cut => "Lose fat with a calorie deficit",
        }
    }
}

/// Where inside the goal's calorie range the target lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    /// Largest adjustment
    Aggressive,
    /// Midpoint of the range
    Balanced,
    /// Smallest adjustment
    Conservative,
}

impl GoalPriority {
    /// All options in display order
    pub const ALL: [Self; 3] = [Self::Aggressive, Self::Balanced, Self::Conservative];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Balanced => "balanced",
            Self::Conservative => "conservative",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aggressive => "Aggressive",
            Self::Balanced => "Balanced",
            Self::Conservative => "Conservative",
        }
    }

    /// One-line explanation shown under the label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Aggressive => "Faster results, harder to sustain",
            Self::Balanced => "Steady progress with a moderate adjustment",
            Self::Conservative => "Slower, gentler change",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(HeightUnit, WeightUnit, Gender, ActivityLevel, Goal, GoalPriority);

/// Profile accumulated over one onboarding session
///
/// Numeric answers stay as raw strings until the nutrition calculator
/// consumes them; unset categorical answers are `None`, distinct from any
/// chosen value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height with its unit
    #[serde(default)]
    pub height: Height,
    /// Weight with its unit
    #[serde(default)]
    pub weight: Weight,
    /// Age in years, raw input
    #[serde(default)]
    pub age: String,
    /// Biological sex
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<Gender>,
    /// Activity level
    #[serde(default, deserialize_with = "empty_as_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Body composition goal
    #[serde(default, deserialize_with = "empty_as_none")]
    pub goal: Option<Goal>,
    /// Goal priority
    #[serde(default, deserialize_with = "empty_as_none")]
    pub goal_priority: Option<GoalPriority>,
}

/// Treat `""` and `null` as an unset enum answer
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Value(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Value(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => Err(D::Error::custom(format!("unknown variant `{text}`"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_profile_deserializes_wire_shape() {
        let profile: UserProfile = serde_json::from_value(json!({
            "height": { "value": "5", "unit": "ft", "inches": "11" },
            "weight": { "value": "170", "unit": "lb" },
            "age": "29",
            "gender": "female",
            "activityLevel": "very_active",
            "goal": "",
            "goalPriority": "balanced"
        }))
        .unwrap();

        assert_eq!(profile.height, Height::ft("5", "11"));
        assert_eq!(profile.weight, Weight::new("170", WeightUnit::Lb));
        assert_eq!(profile.gender, Some(Gender::Female));
        assert_eq!(profile.activity_level, Some(ActivityLevel::VeryActive));
        assert_eq!(profile.goal, None);
        assert_eq!(profile.goal_priority, Some(GoalPriority::Balanced));
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result = serde_json::from_value::<UserProfile>(json!({ "goal": "maintain" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_metric_height_has_no_inches() {
        let height = Height::cm("180");
        assert_eq!(height.unit(), HeightUnit::Cm);
        assert_eq!(height.inches(), None);
        assert_eq!(
            serde_json::to_value(&height).unwrap(),
            json!({ "unit": "cm", "value": "180" })
        );
    }

    #[test]
    fn test_empty_profile_is_default() {
        let profile: UserProfile = serde_json::from_value(json!({})).unwrap();
        assert_eq!(profile, UserProfile::default());
        assert_eq!(profile.height.value(), "");
    }
}
