use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub mod bmi;
pub mod food;
pub mod session;
pub mod tips;

pub use bmi::{BmiCategory, BmiResult, DisplayClass, bmi_scale_position, compute_bmi};
pub use food::nearest_food;
pub use session::ViewState;
pub use tips::{HealthTip, TipTone, health_tip};

/// Exercise types offered by the dashboard, in selector order.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr,
)]
pub enum Activity {
    #[default]
    Cycling,
    Running,
    Walking,
    Workout,
    Yoga,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Cycling,
        Activity::Running,
        Activity::Walking,
        Activity::Workout,
        Activity::Yoga,
    ];

    /// Name of the one-hot column the model uses for this activity.
    pub fn column_name(&self) -> String {
        format!("Activity_{}", self.as_ref())
    }
}

/// Widget constraints for one numeric input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl InputBounds {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self { min, max, step, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

pub const WEIGHT_KG: InputBounds = InputBounds::new(30.0, 150.0, 1.0, 70.0);
pub const HEIGHT_CM: InputBounds = InputBounds::new(120.0, 220.0, 1.0, 170.0);
pub const HEART_RATE_BPM: InputBounds = InputBounds::new(60.0, 200.0, 1.0, 120.0);
pub const DURATION_MIN: InputBounds = InputBounds::new(10.0, 180.0, 5.0, 45.0);
pub const MET: InputBounds = InputBounds::new(1.0, 15.0, 0.1, 5.0);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: Activity,
    pub heart_rate_bpm: u32,
    pub duration_min: u32,
    pub met: f64,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            weight_kg: WEIGHT_KG.default,
            height_cm: HEIGHT_CM.default,
            activity: Activity::default(),
            heart_rate_bpm: HEART_RATE_BPM.default as u32,
            duration_min: DURATION_MIN.default as u32,
            met: MET.default,
        }
    }
}

impl UserInput {
    /// Returns the name and value of every field outside its widget bounds.
    pub fn out_of_range_fields(&self) -> Vec<(&'static str, f64)> {
        [
            ("weight_kg", self.weight_kg, WEIGHT_KG),
            ("height_cm", self.height_cm, HEIGHT_CM),
            ("heart_rate_bpm", self.heart_rate_bpm as f64, HEART_RATE_BPM),
            ("duration_min", self.duration_min as f64, DURATION_MIN),
            ("met", self.met, MET),
        ]
        .into_iter()
        .filter(|(_, value, bounds)| !bounds.contains(*value))
        .map(|(name, value, _)| (name, value))
        .collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub calories: f64,
    pub food_equivalent: String,
}

impl PredictionResult {
    pub fn from_calories(calories: f64) -> Self {
        Self {
            calories,
            food_equivalent: nearest_food(calories).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PredictResponse {
    pub request_id: String,
    pub prediction: PredictionResult,
    /// False when the model has no column for the selected activity.
    pub activity_encoded: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn activities_keep_selector_order() {
        let names: Vec<String> = Activity::iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["Cycling", "Running", "Walking", "Workout", "Yoga"]);
        assert_eq!(Activity::iter().collect::<Vec<_>>(), Activity::ALL);
        assert_eq!(Activity::from_str("Yoga").unwrap(), Activity::Yoga);
        assert_eq!(Activity::Running.column_name(), "Activity_Running");
    }

    #[test]
    fn default_input_sits_inside_bounds() {
        let input = UserInput::default();
        assert!(input.out_of_range_fields().is_empty());
        assert_eq!(input.heart_rate_bpm, 120);
        assert_eq!(input.duration_min, 45);
    }

    #[test]
    fn out_of_range_fields_are_reported_by_name() {
        let input = UserInput {
            weight_kg: 10.0,
            met: f64::NAN,
            ..UserInput::default()
        };
        let names: Vec<&str> = input.out_of_range_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["weight_kg", "met"]);
    }

    #[test]
    fn clamp_pins_to_bounds() {
        assert_eq!(HEIGHT_CM.clamp(500.0), 220.0);
        assert_eq!(HEIGHT_CM.clamp(10.0), 120.0);
        assert_eq!(HEIGHT_CM.clamp(f64::NAN), 170.0);
    }

    #[test]
    fn user_input_wire_format() {
        let json = r#"{"weight_kg":70.0,"height_cm":170.0,"activity":"Running","heart_rate_bpm":120,"duration_min":45,"met":5.0}"#;
        let input: UserInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.activity, Activity::Running);
    }
}
