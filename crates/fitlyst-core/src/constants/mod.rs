// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, input limits, and meal-idea generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Constants module
//!
//! Constants are grouped by domain rather than collected in a single file.

/// Unit conversion and measurement constants
pub mod units;

/// Inclusive upper bounds applied by onboarding step validation
pub mod limits;

/// Meal-idea generation defaults (model, sampling, output ceiling)
pub mod generation;
