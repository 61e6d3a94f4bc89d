// ABOUTME: Prompt templates for meal idea generation loaded at compile time
// ABOUTME: Renders daily nutrition targets into the user prompt sent to the LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! # Meal Idea Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.
//! The user prompt carries `{calories}`, `{protein}`, `{carbs}` and `{fat}`
//! placeholders filled from [`NutritionTargets`].

use fitlyst_core::models::NutritionTargets;

/// System message framing the assistant for meal idea generation
pub const MEAL_IDEAS_SYSTEM_PROMPT: &str = include_str!("meal_ideas_system.md");

/// User prompt template with macro target placeholders
const MEAL_IDEAS_USER_TEMPLATE: &str = include_str!("meal_ideas_user.md");

/// Get the system prompt for meal idea generation
#[must_use]
pub fn get_meal_ideas_system_prompt() -> &'static str {
    MEAL_IDEAS_SYSTEM_PROMPT.trim_end()
}

/// Build the user prompt for the given daily targets
///
/// Integral targets render without a fractional part (`2259`, not `2259.0`).
#[must_use]
pub fn build_meal_ideas_prompt(targets: &NutritionTargets) -> String {
    MEAL_IDEAS_USER_TEMPLATE
        .replace("{calories}", &targets.calories.to_string())
        .replace("{protein}", &targets.protein.to_string())
        .replace("{carbs}", &targets.carbs.to_string())
        .replace("{fat}", &targets.fat.to_string())
        .trim_end()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> NutritionTargets {
        NutritionTargets {
            calories: 2259.0,
            protein: 160.0,
            carbs: 261.0,
            fat: 64.0,
        }
    }

    #[test]
    fn test_prompt_embeds_all_targets() {
        let prompt = build_meal_ideas_prompt(&targets());
        assert!(prompt.contains("- Calories: 2259 kcal"));
        assert!(prompt.contains("- Protein: 160 g"));
        assert!(prompt.contains("- Carbohydrates: 261 g"));
        assert!(prompt.contains("- Fat: 64 g"));
        assert!(!prompt.contains("{calories}"));
    }

    #[test]
    fn test_prompt_describes_output_contract() {
        let prompt = build_meal_ideas_prompt(&targets());
        assert!(prompt.contains("3-5 meal ideas"));
        assert!(prompt.contains("\"breakfast\", \"lunch\", or \"dinner\""));
        assert!(prompt.contains("\"cookingInstructions\": ["));
        assert!(prompt.ends_with("Only return valid JSON, no additional text."));
    }

    #[test]
    fn test_fractional_targets_are_kept() {
        let prompt = build_meal_ideas_prompt(&NutritionTargets {
            calories: 1800.5,
            protein: 120.0,
            carbs: 0.0,
            fat: 0.0,
        });
        assert!(prompt.contains("- Calories: 1800.5 kcal"));
        assert!(prompt.contains("- Carbohydrates: 0 g"));
    }

    #[test]
    fn test_system_prompt_is_single_line() {
        assert!(get_meal_ideas_system_prompt().starts_with("You are a helpful nutrition assistant"));
        assert_eq!(MEAL_IDEAS_SYSTEM_PROMPT.trim().lines().count(), 1);
    }
}
