// ABOUTME: Nutrition calculation endpoint
// ABOUTME: Computes BMI, BMR, calories and macros for a submitted profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use fitlyst_core::errors::AppError;
use fitlyst_core::models::{NutritionResult, UserProfile};
use fitlyst_intelligence::calculate_nutrition;
use serde::{Deserialize, Serialize};

use crate::server::ServerResources;

/// Calculation request body
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CalculateNutritionRequest {
    /// Profile as collected by onboarding
    pub profile: UserProfile,
}

/// Calculation response body
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateNutritionResponse {
    /// Daily target
    pub nutrition: NutritionResult,
}

/// Nutrition routes container
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calculate-nutrition", post(Self::calculate))
            .with_state(resources)
    }

    /// `POST /api/calculate-nutrition`
    async fn calculate(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Json<CalculateNutritionResponse>, AppError> {
        let request: CalculateNutritionRequest = serde_json::from_slice(&body).map_err(|e| {
            AppError::invalid_input("Invalid profile data provided").with_source(e)
        })?;

        let nutrition = calculate_nutrition(&request.profile, &resources.nutrition_config);
        Ok(Json(CalculateNutritionResponse { nutrition }))
    }
}
