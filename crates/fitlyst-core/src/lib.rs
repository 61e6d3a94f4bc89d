// ABOUTME: Core types and constants for the Fitlyst nutrition planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

#![deny(unsafe_code)]

//! # Fitlyst Core
//!
//! Foundation crate providing shared types and constants for the Fitlyst
//! nutrition planner. It changes rarely, so the rest of the workspace can
//! build on it without frequent recompilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **models**: User profile, nutrition result, and meal idea types
//! - **constants**: Unit factors, validation limits, and generation defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `NutritionResult`, `MealIdea`)
pub mod models;
