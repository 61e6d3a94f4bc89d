// ABOUTME: Onboarding questionnaire: step registry, validation and state machine
// ABOUTME: Drives a user through height, weight, age and goal questions to results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Onboarding
//!
//! The questionnaire is a linear state machine over [`STEPS`]: the user can
//! move forward only while the current answer validates, and the last
//! forward move lands in [`OnboardingState::Results`].

mod machine;
mod steps;
mod validation;

pub use machine::{Answer, Onboarding, OnboardingState, UnitChoice};
pub use steps::{StepDefinition, StepKind, StepOption, STEPS};
pub use validation::validate_step;
