// ABOUTME: axum IntoResponse integration for AppError
// ABOUTME: Maps error codes to HTTP status and emits the { "error": ... } body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = ?self.code, details = %self.details, "{}", self.message);
        } else {
            warn!(code = ?self.code, "{}", self.message);
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
