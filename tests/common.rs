// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample profiles and a router over a mock provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitlyst`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::{Arc, Once};

use axum::Router;
use fitlyst::config::ServerConfig;
use fitlyst::llm::LlmProvider;
use fitlyst::server::{build_router, ServerResources};
use fitlyst_core::models::{
    ActivityLevel, Gender, Goal, GoalPriority, Height, UserProfile, Weight, WeightUnit,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        // Another test binary helper may have installed a subscriber already
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Male, 180 cm, 80 kg, 30 years, moderately active, aggressive cut
pub fn reference_profile() -> UserProfile {
    UserProfile {
        height: Height::cm("180"),
        weight: Weight::new("80", WeightUnit::Kg),
        age: "30".to_owned(),
        gender: Some(Gender::Male),
        activity_level: Some(ActivityLevel::Moderate),
        goal: Some(Goal::Cut),
        goal_priority: Some(GoalPriority::Aggressive),
    }
}

/// Router over the full API with the given provider and default configuration
pub fn test_router(provider: Arc<dyn LlmProvider>) -> Router {
    init_test_logging();
    let resources = ServerResources::new(ServerConfig::default(), provider);
    build_router(Arc::new(resources))
}
