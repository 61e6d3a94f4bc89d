// ABOUTME: Integration tests for parsing untrusted completion text into meal ideas
// ABOUTME: Fence extraction, all-or-nothing rejection and field normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use fitlyst_core::errors::{AppError, ErrorCode};
use fitlyst_core::models::MealType;
use fitlyst_intelligence::{parse_meal_ideas, MealIdeaParseError};

const TWO_MEALS: &str = r#"[
  {
    "mealType": "breakfast",
    "name": "Greek Yogurt Bowl",
    "description": "Yogurt with berries and oats",
    "macros": { "calories": 450, "protein": 35, "carbs": 50, "fat": 10 },
    "cookingInstructions": ["Add yogurt to a bowl", "Top with berries and oats"]
  },
  {
    "mealType": "dinner",
    "name": "Chicken Stir Fry",
    "macros": { "calories": 700, "protein": 55 },
    "cookingInstructions": "Stir fry everything for 10 minutes"
  }
]"#;

#[test]
fn test_json_fenced_completion_is_extracted() {
    let text = format!("Here are your meals:\n```json\n{TWO_MEALS}\n```\nEnjoy!");
    let meals = parse_meal_ideas(&text).unwrap();

    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].meal_type, MealType::Breakfast);
    assert_eq!(meals[0].name, "Greek Yogurt Bowl");
    assert_eq!(meals[0].cooking_instructions.len(), 2);
}

#[test]
fn test_untagged_fence_and_bare_payload_are_accepted() {
    let fenced = format!("```\n{TWO_MEALS}\n```");
    assert_eq!(parse_meal_ideas(&fenced).unwrap().len(), 2);
    assert_eq!(parse_meal_ideas(TWO_MEALS).unwrap().len(), 2);
}

#[test]
fn test_missing_fields_are_defaulted() {
    let meals = parse_meal_ideas(TWO_MEALS).unwrap();
    let dinner = &meals[1];

    assert_eq!(dinner.description, "");
    assert_eq!(dinner.macros.calories, 700.0);
    assert_eq!(dinner.macros.carbs, 0.0);
    assert_eq!(dinner.macros.fat, 0.0);
    assert_eq!(
        dinner.cooking_instructions,
        vec!["Stir fry everything for 10 minutes".to_owned()]
    );
}

#[test]
fn test_absent_or_null_instructions_become_empty() {
    let text = r#"[
      {"mealType": "lunch", "name": "Wrap", "macros": {"calories": 500}},
      {"mealType": "lunch", "name": "Salad", "macros": {"calories": 300}, "cookingInstructions": null}
    ]"#;
    let meals = parse_meal_ideas(text).unwrap();

    assert!(meals[0].cooking_instructions.is_empty());
    assert!(meals[1].cooking_instructions.is_empty());
}

#[test]
fn test_non_scalar_instruction_steps_are_dropped_in_order() {
    let text = r#"[
      {"mealType": "dinner", "name": "Omelette", "macros": {"calories": 400},
       "cookingInstructions": ["Whisk eggs", {"step": 2}, null, 3, ["nested"], "Fold and serve"]}
    ]"#;
    let meals = parse_meal_ideas(text).unwrap();

    assert_eq!(
        meals[0].cooking_instructions,
        vec!["Whisk eggs".to_owned(), "3".to_owned(), "Fold and serve".to_owned()]
    );
}

#[test]
fn test_one_invalid_element_rejects_everything() {
    let text = r#"[
      {"mealType": "breakfast", "name": "Oats", "macros": {"calories": 400}},
      {"mealType": "lunch", "name": "Soup"}
    ]"#;
    let error = parse_meal_ideas(text).unwrap_err();

    let MealIdeaParseError::InvalidMeals(issues) = error else {
        panic!("expected element issues");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].index, 1);
    assert!(issues[0].problems.iter().any(|p| p.contains("macros")));
}

#[test]
fn test_every_bad_element_is_reported() {
    let text = r#"[
      {"name": "No type", "macros": {}},
      {"mealType": "snack", "name": "Chips", "macros": {"calories": 200}},
      "not an object"
    ]"#;
    let MealIdeaParseError::InvalidMeals(issues) = parse_meal_ideas(text).unwrap_err() else {
        panic!("expected element issues");
    };

    let indices: Vec<usize> = issues.iter().map(|issue| issue.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_non_array_and_invalid_json_are_terminal() {
    assert!(matches!(
        parse_meal_ideas(r#"{"mealIdeas": []}"#),
        Err(MealIdeaParseError::NotAnArray { .. })
    ));
    assert!(matches!(
        parse_meal_ideas("I'm sorry, I can't help with that."),
        Err(MealIdeaParseError::InvalidJson(_))
    ));
}

#[test]
fn test_empty_array_is_valid() {
    assert!(parse_meal_ideas("[]").unwrap().is_empty());
}

#[test]
fn test_parse_failure_maps_to_user_facing_error() {
    let error = AppError::from(parse_meal_ideas("[1, 2]").unwrap_err());

    assert_eq!(error.code, ErrorCode::ResponseParseFailed);
    assert_eq!(error.message, "Failed to parse AI response");
    assert_eq!(error.http_status(), 500);
    assert_eq!(error.details["issues"].as_array().unwrap().len(), 2);
}
