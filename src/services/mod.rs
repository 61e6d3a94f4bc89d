// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Hosts the meal idea generation round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Domain service layer
//!
//! Route handlers stay thin; the rules for talking to the completion backend
//! live here so they can be exercised without an HTTP stack.

/// Meal idea generation: credential check, prompt, completion, validation
pub mod meal_ideas;

pub use meal_ideas::MealIdeaService;
