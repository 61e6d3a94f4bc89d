// ABOUTME: Onboarding state machine holding the step position and the profile
// ABOUTME: Answer merging, atomic unit toggles, validation-gated navigation, progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

use fitlyst_core::models::{
    ActivityLevel, Gender, Goal, GoalPriority, Height, HeightUnit, NutritionResult, UserProfile,
    Weight, WeightUnit,
};
use serde::Serialize;
use tracing::debug;

use super::{validate_step, StepDefinition, STEPS};
use crate::nutrition_calculator::calculate_nutrition;
use crate::units::{convert_height, convert_weight};
use crate::NutritionConfig;

/// Position in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "step", rename_all = "camelCase")]
pub enum OnboardingState {
    /// Answering the step at this index
    Answering(usize),
    /// All steps answered; showing the nutrition target
    Results,
}

impl OnboardingState {
    /// State one step forward in a flow of `total` steps
    #[must_use]
    pub const fn next(self, total: usize) -> Self {
        match self {
            Self::Answering(index) if index + 1 < total => Self::Answering(index + 1),
            Self::Answering(_) | Self::Results => Self::Results,
        }
    }

    /// State one step back in a flow of `total` steps
    #[must_use]
    pub const fn previous(self, total: usize) -> Self {
        match self {
            Self::Results => Self::Answering(total.saturating_sub(1)),
            Self::Answering(index) => Self::Answering(index.saturating_sub(1)),
        }
    }
}

/// A single answer to merge into the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Height, including its unit
    Height(Height),
    /// Weight, including its unit
    Weight(Weight),
    /// Age as typed
    Age(String),
    /// Gender
    Gender(Gender),
    /// Activity level
    ActivityLevel(ActivityLevel),
    /// Goal
    Goal(Goal),
    /// Goal priority
    GoalPriority(GoalPriority),
}

/// A unit toggle for one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitChoice {
    /// Height unit
    Height(HeightUnit),
    /// Weight unit
    Weight(WeightUnit),
}

/// One onboarding session
///
/// Owns the profile for the lifetime of the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Onboarding {
    state: OnboardingState,
    profile: UserProfile,
    steps: &'static [StepDefinition],
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    /// Start at the first step with an empty profile
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: OnboardingState::Answering(0),
            profile: UserProfile::default(),
            steps: &STEPS,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> OnboardingState {
        self.state
    }

    /// Profile collected so far
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Step being answered, `None` while showing results
    #[must_use]
    pub fn current_step(&self) -> Option<&StepDefinition> {
        match self.state {
            OnboardingState::Answering(index) => self.steps.get(index),
            OnboardingState::Results => None,
        }
    }

    /// Number of steps in the flow
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// One-based number of the step being answered, `None` in results
    #[must_use]
    pub const fn step_number(&self) -> Option<usize> {
        match self.state {
            OnboardingState::Answering(index) => Some(index + 1),
            OnboardingState::Results => None,
        }
    }

    /// Active height unit
    #[must_use]
    pub const fn height_unit(&self) -> HeightUnit {
        self.profile.height.unit()
    }

    /// Active weight unit
    #[must_use]
    pub const fn weight_unit(&self) -> WeightUnit {
        self.profile.weight.unit
    }

    /// Merge one answer into the profile
    pub fn set_answer(&mut self, answer: Answer) {
        match answer {
            Answer::Height(height) => self.profile.height = height,
            Answer::Weight(weight) => self.profile.weight = weight,
            Answer::Age(age) => self.profile.age = age,
            Answer::Gender(gender) => self.profile.gender = Some(gender),
            Answer::ActivityLevel(level) => self.profile.activity_level = Some(level),
            Answer::Goal(goal) => self.profile.goal = Some(goal),
            Answer::GoalPriority(priority) => self.profile.goal_priority = Some(priority),
        }
    }

    /// Switch a dimension's unit, converting the stored value in the same step
    pub fn set_unit(&mut self, choice: UnitChoice) {
        match choice {
            UnitChoice::Height(unit) => {
                self.profile.height = convert_height(&self.profile.height, unit);
            }
            UnitChoice::Weight(unit) => {
                self.profile.weight = convert_weight(&self.profile.weight, unit);
            }
        }
    }

    /// Whether the current step's answer is acceptable; false while showing results
    #[must_use]
    pub fn validate_current_step(&self) -> bool {
        self.current_step()
            .is_some_and(|step| validate_step(step.kind, &self.profile))
    }

    /// Move forward if the current answer validates
    ///
    /// Returns the state after the call.
    pub fn advance(&mut self) -> OnboardingState {
        if self.validate_current_step() {
            let next = self.state.next(self.total_steps());
            debug!(from = ?self.state, to = ?next, "onboarding advanced");
            self.state = next;
        }
        self.state
    }

    /// Move back one step; a no-op on the first step
    ///
    /// Returns the state after the call.
    pub fn retreat(&mut self) -> OnboardingState {
        let previous = self.state.previous(self.total_steps());
        if previous != self.state {
            debug!(from = ?self.state, to = ?previous, "onboarding retreated");
        }
        self.state = previous;
        self.state
    }

    /// Progress indicator value in percent
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        match self.state {
            OnboardingState::Answering(index) => {
                (index + 1) as f64 / self.total_steps() as f64 * 100.0
            }
            OnboardingState::Results => 100.0,
        }
    }

    /// Nutrition target for the current profile, only once results are shown
    #[must_use]
    pub fn nutrition(&self, config: &NutritionConfig) -> Option<NutritionResult> {
        match self.state {
            OnboardingState::Results => Some(calculate_nutrition(&self.profile, config)),
            OnboardingState::Answering(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        assert_eq!(
            OnboardingState::Answering(0).next(7),
            OnboardingState::Answering(1)
        );
        assert_eq!(OnboardingState::Answering(6).next(7), OnboardingState::Results);
        assert_eq!(
            OnboardingState::Results.previous(7),
            OnboardingState::Answering(6)
        );
        assert_eq!(
            OnboardingState::Answering(0).previous(7),
            OnboardingState::Answering(0)
        );
    }

    #[test]
    fn test_advance_blocked_without_answer() {
        let mut onboarding = Onboarding::new();
        assert!(!onboarding.validate_current_step());
        assert_eq!(onboarding.advance(), OnboardingState::Answering(0));
    }

    #[test]
    fn test_unit_toggle_converts_stored_value() {
        let mut onboarding = Onboarding::new();
        onboarding.set_answer(Answer::Weight(Weight::new("80", WeightUnit::Kg)));
        onboarding.set_unit(UnitChoice::Weight(WeightUnit::Lb));

        assert_eq!(onboarding.weight_unit(), WeightUnit::Lb);
        assert_eq!(onboarding.profile().weight.value, "176.4");
    }
}
