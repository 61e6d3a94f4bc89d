// ABOUTME: Meal idea types produced from validated completion text
// ABOUTME: MealType, MealMacros and MealIdea with camelCase wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use serde::{Deserialize, Serialize};

/// Meal slot a suggestion is meant for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
}

impl MealType {
    /// Parse a meal type, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            _ => None,
        }
    }
}

/// Macro breakdown of a single meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealMacros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// One suggested meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealIdea {
    /// Meal slot
    pub meal_type: MealType,
    /// Dish name
    pub name: String,
    /// Short description, empty when the model gave none
    pub description: String,
    /// Macro breakdown
    pub macros: MealMacros,
    /// Ordered cooking steps, possibly empty
    pub cooking_instructions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_meal_type_parse_is_case_insensitive() {
        assert_eq!(MealType::parse_lenient(" Lunch "), Some(MealType::Lunch));
        assert_eq!(MealType::parse_lenient("DINNER"), Some(MealType::Dinner));
        assert_eq!(MealType::parse_lenient("snack"), None);
    }

    #[test]
    fn test_meal_idea_serializes_camel_case() {
        let idea = MealIdea {
            meal_type: MealType::Breakfast,
            name: "Oats".to_owned(),
            description: String::new(),
            macros: MealMacros::default(),
            cooking_instructions: vec!["Boil milk".to_owned()],
        };

        let value = serde_json::to_value(&idea).unwrap();
        assert_eq!(value["mealType"], json!("breakfast"));
        assert_eq!(value["cookingInstructions"], json!(["Boil milk"]));
    }
}
