// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Builds the tower layers wrapped around the API router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

/// CORS configuration
pub mod cors;
/// Request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, http_trace_layer};
