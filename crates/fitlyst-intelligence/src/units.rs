// ABOUTME: Height and weight unit conversion with lenient numeric parsing
// ABOUTME: Converts stored raw values atomically when the user toggles a unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitlyst

//! Unit Converter
//!
//! Profile measurements are raw strings, so conversion works on strings too:
//! parse, convert, round, and format back. Rounding is half-up
//! (`floor(x + 0.5)`) everywhere so results are stable across platforms.

use fitlyst_core::constants::units::{
    CM_PER_FOOT, CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB, LB_PER_KG,
};
use fitlyst_core::models::{Height, HeightUnit, Weight, WeightUnit};

/// Parse a raw numeric answer, accepting only finite numbers
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a raw numeric answer, treating anything unparsable as zero
#[must_use]
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

/// Round half up to the nearest whole number
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Feet plus inches to centimeters, unrounded
#[must_use]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet.mul_add(CM_PER_FOOT, inches * CM_PER_INCH)
}

/// Centimeters to whole feet and whole inches
///
/// Inches are rounded; a value that rounds up to 12 carries into feet.
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> (f64, f64) {
    let total_inches = cm / CM_PER_INCH;
    let mut feet = (total_inches / INCHES_PER_FOOT).floor();
    let mut inches = round_half_up(total_inches % INCHES_PER_FOOT);
    if inches >= INCHES_PER_FOOT {
        feet += 1.0;
        inches -= INCHES_PER_FOOT;
    }
    (feet, inches)
}

/// Pounds to kilograms, unrounded
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Kilograms to pounds, unrounded
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Height in centimeters; unparsable parts count as zero
#[must_use]
pub fn height_in_cm(height: &Height) -> f64 {
    match height {
        Height::Cm { value } => parse_or_zero(value),
        Height::Ft { value, inches } => {
            feet_inches_to_cm(parse_or_zero(value), parse_or_zero(inches))
        }
    }
}

/// Weight in kilograms; an unparsable value counts as zero
#[must_use]
pub fn weight_in_kg(weight: &Weight) -> f64 {
    let value = parse_or_zero(&weight.value);
    match weight.unit {
        WeightUnit::Kg => value,
        WeightUnit::Lb => lb_to_kg(value),
    }
}

/// Re-express a stored height under another unit
///
/// A positive value is converted (cm become whole feet and inches, feet and
/// inches become whole cm). Anything else clears the value.
#[must_use]
pub fn convert_height(height: &Height, target: HeightUnit) -> Height {
    if height.unit() == target {
        return height.clone();
    }

    let value = parse_number(height.value()).filter(|v| *v > 0.0);
    match (height, value) {
        (Height::Cm { .. }, Some(cm)) => {
            let (feet, inches) = cm_to_feet_inches(cm);
            Height::ft(format_number(feet), format_number(inches))
        }
        (Height::Ft { inches, .. }, Some(feet)) => {
            let cm = round_half_up(feet_inches_to_cm(feet, parse_or_zero(inches)));
            Height::cm(format_number(cm))
        }
        (Height::Cm { .. }, None) => Height::ft("", ""),
        (Height::Ft { .. }, None) => Height::cm(""),
    }
}

/// Re-express a stored weight under another unit, rounded to one decimal
///
/// A missing or non-positive value is cleared rather than reinterpreted.
#[must_use]
pub fn convert_weight(weight: &Weight, target: WeightUnit) -> Weight {
    if weight.unit == target {
        return weight.clone();
    }

    let converted = parse_number(&weight.value)
        .filter(|v| *v > 0.0)
        .map(|v| match target {
            WeightUnit::Lb => round_to_tenth(kg_to_lb(v)),
            WeightUnit::Kg => round_to_tenth(lb_to_kg(v)),
        });

    Weight::new(converted.map(format_number).unwrap_or_default(), target)
}

/// Format a number the way it would be typed: no trailing `.0`
fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number(" 72.5 "), Some(72.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert!((parse_or_zero("x") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_half_up() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) + 2.0).abs() < f64::EPSILON);
        assert!((round_to_tenth(24.691) - 24.7).abs() < 1e-9);
    }

    #[test]
    fn test_cm_to_ft_conversion() {
        let converted = convert_height(&Height::cm("180"), HeightUnit::Ft);
        assert_eq!(converted, Height::ft("5", "11"));
    }

    #[test]
    fn test_inches_carry_into_feet() {
        // 182.5 cm is 71.85 in, i.e. 5 ft 11.85 in, which rounds to 6 ft 0 in
        assert_eq!(cm_to_feet_inches(182.5), (6.0, 0.0));
    }

    #[test]
    fn test_ft_to_cm_conversion() {
        let converted = convert_height(&Height::ft("5", "11"), HeightUnit::Cm);
        assert_eq!(converted, Height::cm("180"));

        let no_inches = convert_height(&Height::ft("6", ""), HeightUnit::Cm);
        assert_eq!(no_inches, Height::cm("183"));
    }

    #[test]
    fn test_invalid_height_is_cleared() {
        assert_eq!(
            convert_height(&Height::cm("0"), HeightUnit::Ft),
            Height::ft("", "")
        );
        assert_eq!(
            convert_height(&Height::ft("", "7"), HeightUnit::Cm),
            Height::cm("")
        );
    }

    #[test]
    fn test_same_unit_is_noop() {
        let height = Height::cm("171");
        assert_eq!(convert_height(&height, HeightUnit::Cm), height);
    }

    #[test]
    fn test_weight_conversion() {
        let lb = convert_weight(&Weight::new("80", WeightUnit::Kg), WeightUnit::Lb);
        assert_eq!(lb, Weight::new("176.4", WeightUnit::Lb));

        let kg = convert_weight(&Weight::new("176.4", WeightUnit::Lb), WeightUnit::Kg);
        assert_eq!(kg, Weight::new("80", WeightUnit::Kg));

        let cleared = convert_weight(&Weight::new("-3", WeightUnit::Kg), WeightUnit::Lb);
        assert_eq!(cleared, Weight::new("", WeightUnit::Lb));
    }

    #[test]
    fn test_cm_round_trip_within_one_cm() {
        for cm in 100..=250 {
            let original = Height::cm(cm.to_string());
            let imperial = convert_height(&original, HeightUnit::Ft);
            let back = convert_height(&imperial, HeightUnit::Cm);
            let diff = (height_in_cm(&back) - f64::from(cm)).abs();
            assert!(diff <= 1.0, "{cm} cm came back as {back:?}");
        }
    }
}
