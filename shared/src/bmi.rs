//! Body Mass Index classification.
//!
//! Category thresholds are half-open intervals with an inclusive lower bound,
//! so a value sitting exactly on a boundary belongs to the upper category.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 24.9;
const OVERWEIGHT_BELOW: f64 = 29.9;

/// Lower and upper end of the BMI progress scale.
const SCALE_MIN: f64 = 10.0;
const SCALE_SPAN: f64 = 30.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

/// Badge styling attached to a category.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayClass {
    Normal,
    Warning,
    Danger,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < NORMAL_BELOW {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn display_class(&self) -> DisplayClass {
        match self {
            BmiCategory::Normal => DisplayClass::Normal,
            BmiCategory::Underweight | BmiCategory::Overweight => DisplayClass::Warning,
            BmiCategory::Obesity => DisplayClass::Danger,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    pub display_class: DisplayClass,
}

pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> BmiResult {
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    let category = BmiCategory::classify(value);
    BmiResult {
        value,
        category,
        display_class: category.display_class(),
    }
}

/// Position of `bmi` on the dashboard's linear scale, in `[0, 1]`.
pub fn bmi_scale_position(bmi: f64) -> f64 {
    ((bmi - SCALE_MIN) / SCALE_SPAN).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_adult_is_normal() {
        let result = compute_bmi(70.0, 170.0);
        assert!((result.value - 24.22).abs() < 0.01);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.display_class, DisplayClass::Normal);
        assert_eq!(result.display_class.as_ref(), "normal");
    }

    #[test]
    fn boundaries_belong_to_upper_category() {
        // A 1 m height makes the BMI equal to the weight, exactly.
        assert_eq!(compute_bmi(18.5, 100.0).category, BmiCategory::Normal);
        assert_eq!(compute_bmi(24.9, 100.0).category, BmiCategory::Overweight);
        assert_eq!(compute_bmi(29.9, 100.0).category, BmiCategory::Obesity);
        assert_eq!(BmiCategory::classify(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(29.899), BmiCategory::Overweight);
    }

    #[test]
    fn display_classes_per_category() {
        assert_eq!(BmiCategory::Underweight.display_class(), DisplayClass::Warning);
        assert_eq!(BmiCategory::Overweight.display_class(), DisplayClass::Warning);
        assert_eq!(BmiCategory::Obesity.display_class(), DisplayClass::Danger);
        assert_eq!(DisplayClass::Danger.to_string(), "danger");
    }

    #[test]
    fn scale_position_is_clamped() {
        assert_eq!(bmi_scale_position(5.0), 0.0);
        assert_eq!(bmi_scale_position(25.0), 0.5);
        assert_eq!(bmi_scale_position(55.0), 1.0);
    }
}
