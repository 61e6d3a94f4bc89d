// ABOUTME: Main library entry point for the Fitlyst nutrition service
// ABOUTME: Wires configuration, logging, the LLM provider, services and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

#![deny(unsafe_code)]

//! # Fitlyst
//!
//! Backend for a beginner-friendly nutrition onboarding flow. A user answers
//! a short questionnaire, gets deterministic daily calorie and macro targets,
//! and can ask a language model for meal ideas that fit those targets.
//!
//! ## Architecture
//!
//! - **`fitlyst-core`**: errors, domain models and constants
//! - **`fitlyst-intelligence`**: unit conversion, the onboarding state
//!   machine, the nutrition calculator and the meal idea validator
//! - **this crate**: prompt construction, the completion provider, the
//!   generation service and the axum HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlyst::config::ServerConfig;
//! use fitlyst::server::{run, ServerResources};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     run(ServerResources::from_config(config)?).await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// LLM provider abstraction, `OpenAI`-compatible provider and prompts
pub mod llm;

/// HTTP middleware layers
pub mod middleware;

/// HTTP route containers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Domain services
pub mod services;

pub use fitlyst_core::errors::{AppError, AppResult, ErrorCode};
