// ABOUTME: Configuration management for the Fitlyst server
// ABOUTME: Environment-only settings for HTTP, logging and the completion provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Configuration
//!
//! All settings come from environment variables; there are no config files.

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpConfig, LlmConfig, ServerConfig};
