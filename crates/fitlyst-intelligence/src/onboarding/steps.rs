// ABOUTME: Ordered, immutable registry of onboarding questions
// ABOUTME: Step definitions plus option catalogues for categorical answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use fitlyst_core::models::{ActivityLevel, Gender, Goal, GoalPriority};
use serde::Serialize;

/// Kind of answer a step collects, which also selects its validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    /// Height with a cm / ft+in toggle
    Height,
    /// Weight with a kg / lb toggle
    Weight,
    /// Plain number (age)
    Number,
    /// Gender choice
    Gender,
    /// Activity level choice
    Select,
    /// Goal choice
    Goal,
    /// Goal priority choice
    GoalPriority,
}

impl StepKind {
    /// Choices offered for categorical kinds; empty for free input
    #[must_use]
    pub fn options(self) -> Vec<StepOption> {
        match self {
            Self::Height | Self::Weight | Self::Number => Vec::new(),
            Self::Gender => Gender::ALL
                .iter()
                .map(|g| StepOption::new(g.as_str(), g.label(), None))
                .collect(),
            Self::Select => ActivityLevel::ALL
                .iter()
                .map(|a| StepOption::new(a.as_str(), a.label(), None))
                .collect(),
            Self::Goal => Goal::ALL
                .iter()
                .map(|g| StepOption::new(g.as_str(), g.label(), Some(g.description())))
                .collect(),
            Self::GoalPriority => GoalPriority::ALL
                .iter()
                .map(|p| StepOption::new(p.as_str(), p.label(), Some(p.description())))
                .collect(),
        }
    }
}

/// One selectable answer for a categorical step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOption {
    /// Wire value stored in the profile
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
    /// Optional explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl StepOption {
    const fn new(value: &'static str, label: &'static str, description: Option<&'static str>) -> Self {
        Self {
            value,
            label,
            description,
        }
    }
}

/// A question in the onboarding flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    /// Position in the flow
    pub id: usize,
    /// Question text
    pub question: &'static str,
    /// Profile field the answer is stored in
    pub key: &'static str,
    /// Answer kind
    pub kind: StepKind,
}

/// The questionnaire, in order
pub static STEPS: [StepDefinition; 7] = [
    StepDefinition {
        id: 0,
        question: "What's your height?",
        key: "height",
        kind: StepKind::Height,
    },
    StepDefinition {
        id: 1,
        question: "What's your weight?",
        key: "weight",
        kind: StepKind::Weight,
    },
    StepDefinition {
        id: 2,
        question: "How old are you?",
        key: "age",
        kind: StepKind::Number,
    },
    StepDefinition {
        id: 3,
        question: "What's your gender?",
        key: "gender",
        kind: StepKind::Gender,
    },
    StepDefinition {
        id: 4,
        question: "What's your activity level?",
        key: "activityLevel",
        kind: StepKind::Select,
    },
    StepDefinition {
        id: 5,
        question: "What's your goal?",
        key: "goal",
        kind: StepKind::Goal,
    },
    StepDefinition {
        id: 6,
        question: "How fast do you want to get there?",
        key: "goalPriority",
        kind: StepKind::GoalPriority,
    },
];
