// ABOUTME: Meal idea generation endpoint
// ABOUTME: Accepts daily nutrition targets and returns validated meal ideas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use fitlyst_core::errors::AppError;
use fitlyst_core::models::MealIdea;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::server::ServerResources;

/// Successful generation body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealIdeasResponse {
    /// Validated meal ideas, in the order the model produced them
    pub meal_ideas: Vec<MealIdea>,
}

/// Meal idea routes container
pub struct MealIdeaRoutes;

impl MealIdeaRoutes {
    /// Create the meal idea routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-meal-ideas", post(Self::generate))
            .with_state(resources)
    }

    /// `POST /api/generate-meal-ideas`
    ///
    /// The body is read raw so that an unreadable payload still goes through
    /// the credential check first; it then fails payload validation with 400.
    async fn generate(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Json<GenerateMealIdeasResponse>, AppError> {
        let nutrition = serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|mut payload| payload.get_mut("nutrition").map(Value::take))
            .unwrap_or(Value::Null);
        debug!(bytes = body.len(), "meal idea request received");

        let meal_ideas = resources.meal_ideas.generate(&nutrition).await?;
        Ok(Json(GenerateMealIdeasResponse { meal_ideas }))
    }
}
