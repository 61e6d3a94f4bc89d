// ABOUTME: Unit conversion constants for height, weight, and energy
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Pounds per kilogram, used when toggling the weight unit
pub const LB_PER_KG: f64 = 2.204_62;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Kilocalories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Kilocalories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Kilocalories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;
