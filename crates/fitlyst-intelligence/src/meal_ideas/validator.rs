// ABOUTME: Strict validation of completion JSON into typed meal ideas
// ABOUTME: All-or-nothing: any invalid element rejects the whole response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::fmt;

use fitlyst_core::errors::AppError;
use fitlyst_core::models::{MealIdea, MealMacros, MealType};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use super::extract_payload;

/// Message surfaced to callers for every validator rejection
const PARSE_FAILURE_MESSAGE: &str = "Failed to parse AI response";

/// Why a completion could not be turned into meal ideas
#[derive(Debug, Error)]
pub enum MealIdeaParseError {
    /// The extracted payload is not JSON
    #[error("completion payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload is JSON but not an array
    #[error("expected a JSON array of meals, found {found}")]
    NotAnArray {
        /// JSON type that was found instead
        found: &'static str,
    },

    /// One or more elements failed validation
    #[error("{} meal(s) failed validation: {}", .0.len(), join_issues(.0))]
    InvalidMeals(Vec<MealIssue>),
}

/// Problems found in one array element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealIssue {
    /// Position in the array
    pub index: usize,
    /// Human-readable problems, one per field
    pub problems: Vec<String>,
}

impl fmt::Display for MealIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meal {}: {}", self.index, self.problems.join(", "))
    }
}

fn join_issues(issues: &[MealIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<MealIdeaParseError> for AppError {
    fn from(error: MealIdeaParseError) -> Self {
        let issues = match &error {
            MealIdeaParseError::InvalidMeals(issues) => json!(issues),
            MealIdeaParseError::InvalidJson(_) | MealIdeaParseError::NotAnArray { .. } => {
                Value::Null
            }
        };
        let details = json!({ "reason": error.to_string(), "issues": issues });
        Self::response_parse(PARSE_FAILURE_MESSAGE)
            .with_details(details)
            .with_source(error)
    }
}

/// Parse raw completion text into meal ideas
///
/// The payload is taken from a `json` fence, else any fence, else the whole
/// text. It must be a JSON array. Every element needs a truthy `mealType`
/// (breakfast, lunch or dinner), `name` and `macros` object; problems in all
/// elements are collected and reported together, and nothing is returned
/// unless every element passes. Accepted elements are normalized:
/// `description` defaults to empty, each macro to 0 when absent or falsy,
/// and `cookingInstructions` becomes a list (a lone non-empty value is
/// wrapped, anything else is empty). Inside an instruction array, string,
/// number and boolean steps are kept in order; null, object and nested array
/// steps are dropped without rejecting the meal. An empty array is a valid
/// result.
///
/// # Errors
///
/// Returns [`MealIdeaParseError`] if the payload is not JSON, not an array,
/// or contains an invalid element.
pub fn parse_meal_ideas(text: &str) -> Result<Vec<MealIdea>, MealIdeaParseError> {
    let payload = extract_payload(text);
    let value: Value = serde_json::from_str(payload)?;

    let Value::Array(elements) = value else {
        return Err(MealIdeaParseError::NotAnArray {
            found: json_type_name(&value),
        });
    };

    let mut meals = Vec::with_capacity(elements.len());
    let mut issues = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        match normalize_meal(element) {
            Ok(meal) => meals.push(meal),
            Err(problems) => issues.push(MealIssue { index, problems }),
        }
    }

    if !issues.is_empty() {
        return Err(MealIdeaParseError::InvalidMeals(issues));
    }

    debug!(count = meals.len(), "parsed meal ideas");
    Ok(meals)
}

fn normalize_meal(element: &Value) -> Result<MealIdea, Vec<String>> {
    let Some(object) = element.as_object() else {
        return Err(vec![format!(
            "expected an object, found {}",
            json_type_name(element)
        )]);
    };

    let mut problems = Vec::new();
    let meal_type = required(object, "mealType", &mut problems).and_then(|value| {
        let parsed = value.as_str().and_then(MealType::parse_lenient);
        if parsed.is_none() {
            problems.push(format!(
                "mealType must be breakfast, lunch or dinner, found {value}"
            ));
        }
        parsed
    });
    let name = required(object, "name", &mut problems).and_then(|value| {
        let text = scalar_text(value);
        if text.is_none() {
            problems.push("name must be text".to_owned());
        }
        text
    });
    let macros = required(object, "macros", &mut problems).and_then(|value| {
        let parsed = value.as_object().map(normalize_macros);
        if parsed.is_none() {
            problems.push("macros must be an object".to_owned());
        }
        parsed
    });

    match (meal_type, name, macros) {
        (Some(meal_type), Some(name), Some(macros)) if problems.is_empty() => Ok(MealIdea {
            meal_type,
            name,
            description: object
                .get("description")
                .and_then(scalar_text)
                .unwrap_or_default(),
            macros,
            cooking_instructions: normalize_instructions(object.get("cookingInstructions")),
        }),
        _ => Err(problems),
    }
}

/// Fetch a field that must be present and truthy
fn required<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    problems: &mut Vec<String>,
) -> Option<&'a Value> {
    let value = object.get(field).filter(|value| is_truthy(value));
    if value.is_none() {
        problems.push(format!("missing {field}"));
    }
    value
}

fn normalize_macros(object: &Map<String, Value>) -> MealMacros {
    let field = |name: &str| object.get(name).map_or(0.0, numeric_or_zero);
    MealMacros {
        calories: field("calories"),
        protein: field("protein"),
        carbs: field("carbs"),
        fat: field("fat"),
    }
}

/// Numbers pass through, numeric strings are parsed, everything else is 0
fn numeric_or_zero(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Arrays keep their scalar elements in order and drop the rest; a lone
/// non-empty value is wrapped
fn normalize_instructions(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(steps)) => steps.iter().filter_map(scalar_text).collect(),
        Some(other) if is_truthy(other) => scalar_text(other).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Text form of a string, number or boolean
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert!((numeric_or_zero(&json!(" 12.5 ")) - 12.5).abs() < f64::EPSILON);
        assert!(numeric_or_zero(&json!("lots")).abs() < f64::EPSILON);
        assert!(numeric_or_zero(&json!(true)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_issues_name_every_bad_field() {
        let error = parse_meal_ideas(r#"[{"name": "", "mealType": "brunch"}]"#).unwrap_err();
        assert!(
            matches!(
                &error,
                MealIdeaParseError::InvalidMeals(issues)
                    if issues.len() == 1 && issues[0].problems.len() == 3
            ),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn test_app_error_conversion_uses_generic_message() {
        let error: AppError = parse_meal_ideas("not json").unwrap_err().into();
        assert_eq!(error.message, "Failed to parse AI response");
        assert_eq!(error.http_status(), 500);
    }
}
