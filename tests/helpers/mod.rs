// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request driver and the scripted LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod axum_test;
pub mod mock_llm;
