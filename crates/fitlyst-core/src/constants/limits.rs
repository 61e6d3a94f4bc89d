// ABOUTME: Upper bounds for onboarding answers
// ABOUTME: Heights, weights and ages above these limits fail step validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

/// Maximum accepted height in centimeters (inclusive)
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Maximum accepted weight in kilograms (inclusive)
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Maximum accepted age in years (inclusive)
pub const MAX_AGE_YEARS: f64 = 120.0;
