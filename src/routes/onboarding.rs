// ABOUTME: Onboarding questionnaire endpoint
// ABOUTME: Publishes the ordered step registry with option catalogues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use axum::routing::get;
use axum::{Json, Router};
use fitlyst_intelligence::onboarding::{StepKind, StepOption};
use fitlyst_intelligence::STEPS;
use serde::Serialize;

/// A step as rendered for clients
#[derive(Debug, Serialize)]
pub struct StepView {
    /// Position in the flow
    pub id: usize,
    /// Question text
    pub question: &'static str,
    /// Profile field the answer is stored in
    pub key: &'static str,
    /// Answer kind
    pub kind: StepKind,
    /// Choices for categorical steps
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<StepOption>,
}

/// Step registry body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStepsResponse {
    /// Number of steps
    pub total_steps: usize,
    /// Steps in order
    pub steps: Vec<StepView>,
}

/// Onboarding routes container
pub struct OnboardingRoutes;

impl OnboardingRoutes {
    /// Create the onboarding routes
    pub fn routes() -> Router {
        Router::new().route("/api/onboarding/steps", get(Self::steps))
    }

    async fn steps() -> Json<OnboardingStepsResponse> {
        let steps = STEPS
            .iter()
            .map(|step| StepView {
                id: step.id,
                question: step.question,
                key: step.key,
                kind: step.kind,
                options: step.kind.options(),
            })
            .collect();

        Json(OnboardingStepsResponse {
            total_steps: STEPS.len(),
            steps,
        })
    }
}
