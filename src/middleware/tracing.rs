// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying method, path and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use axum::body::Body;
use http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::field::Empty;
use tracing::{info_span, Level, Span};

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: Option<&str>) -> Span {
    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = Empty,
    );
    if let Some(id) = request_id {
        span.record("request_id", id);
    }
    span
}

/// Trace layer wrapping every route
///
/// Uses the caller's `x-request-id` header for correlation when present.
#[must_use]
pub fn http_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok());
    create_request_span(request.method().as_str(), request.uri().path(), request_id)
}
