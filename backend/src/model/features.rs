//! Feature layout of the calorie model.
//!
//! The column list shipped with the model is compiled once into a
//! `FeatureLayout`: a fixed slot for each numeric feature and an explicit
//! activity to column table. Rows are then assembled by index, never by
//! string lookup.

use std::collections::HashMap;

use ndarray::{Array1, ArrayView2, Axis};
use shared::{Activity, UserInput};
use strum::IntoEnumIterator;

use super::artifacts::ArtifactError;

/// Numeric model inputs, in the order `NumericFeatures::values` yields them.
pub const NUMERIC_COLUMNS: [&str; 5] = ["Duration_min", "HeartRate_bpm", "Weight_kg", "Height_cm", "MET"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFeatures {
    pub duration_min: f64,
    pub heart_rate_bpm: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub met: f64,
}

impl NumericFeatures {
    pub fn values(&self) -> [f64; 5] {
        [
            self.duration_min,
            self.heart_rate_bpm,
            self.weight_kg,
            self.height_cm,
            self.met,
        ]
    }

    pub fn from_values(values: [f64; 5]) -> Self {
        let [duration_min, heart_rate_bpm, weight_kg, height_cm, met] = values;
        Self {
            duration_min,
            heart_rate_bpm,
            weight_kg,
            height_cm,
            met,
        }
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        NUMERIC_COLUMNS.into_iter().zip(self.values())
    }
}

impl From<&UserInput> for NumericFeatures {
    fn from(input: &UserInput) -> Self {
        Self {
            duration_min: input.duration_min as f64,
            heart_rate_bpm: input.heart_rate_bpm as f64,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            met: input.met,
        }
    }
}

/// How the selected activity reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEncoding {
    Column(usize),
    /// The model was trained without this activity; the signal is dropped.
    Unmapped,
}

impl ActivityEncoding {
    pub fn is_encoded(&self) -> bool {
        matches!(self, ActivityEncoding::Column(_))
    }
}

#[derive(Debug, Clone)]
pub struct FeatureLayout {
    width: usize,
    numeric: [usize; 5],
    activities: HashMap<Activity, usize>,
}

impl FeatureLayout {
    pub fn from_columns(columns: &[String]) -> Result<Self, ArtifactError> {
        let position = |name: &str| columns.iter().position(|c| c == name);

        let mut numeric = [0usize; 5];
        for (slot, name) in numeric.iter_mut().zip(NUMERIC_COLUMNS) {
            *slot = position(name).ok_or_else(|| ArtifactError::MissingColumn(name.to_string()))?;
        }

        let activities = Activity::iter()
            .filter_map(|activity| position(activity.column_name().as_str()).map(|idx| (activity, idx)))
            .collect();

        Ok(Self {
            width: columns.len(),
            numeric,
            activities,
        })
    }

    pub fn activity(&self, activity: Activity) -> ActivityEncoding {
        self.activities
            .get(&activity)
            .map_or(ActivityEncoding::Unmapped, |&idx| ActivityEncoding::Column(idx))
    }

    /// Activities the dashboard offers but the model has no column for.
    pub fn unmapped_activities(&self) -> Vec<Activity> {
        Activity::iter()
            .filter(|a| !self.activities.contains_key(a))
            .collect()
    }

    /// Lays scaled numeric values and the one-hot activity out in column order.
    pub fn assemble<'a>(
        &self,
        columns: &'a [String],
        scaled: &NumericFeatures,
        activity: Activity,
    ) -> FeatureRow<'a> {
        let mut values = Array1::<f64>::zeros(self.width);
        for (&idx, value) in self.numeric.iter().zip(scaled.values()) {
            values[idx] = value;
        }

        let encoding = self.activity(activity);
        if let ActivityEncoding::Column(idx) = encoding {
            values[idx] = 1.0;
        }

        FeatureRow {
            columns,
            values,
            activity: encoding,
        }
    }
}

/// One model input row, keyed by the model's expected columns.
#[derive(Debug, Clone)]
pub struct FeatureRow<'a> {
    columns: &'a [String],
    values: Array1<f64>,
    activity: ActivityEncoding,
}

impl FeatureRow<'_> {
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx])
    }

    pub fn columns(&self) -> &[String] {
        self.columns
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn activity(&self) -> ActivityEncoding {
        self.activity
    }

    /// The row as a `1 x n` matrix for the predictor.
    pub fn as_matrix(&self) -> ArrayView2<'_, f64> {
        self.values.view().insert_axis(Axis(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::full_columns;

    #[test]
    fn layout_requires_every_numeric_column() {
        let columns: Vec<String> = full_columns().into_iter().filter(|c| c != "MET").collect();
        match FeatureLayout::from_columns(&columns) {
            Err(ArtifactError::MissingColumn(name)) => assert_eq!(name, "MET"),
            other => panic!("expected missing column, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn activity_table_follows_column_list() {
        let columns: Vec<String> = full_columns()
            .into_iter()
            .filter(|c| c != "Activity_Yoga")
            .collect();
        let layout = FeatureLayout::from_columns(&columns).unwrap();
        assert_eq!(layout.activity(Activity::Cycling), ActivityEncoding::Column(5));
        assert_eq!(layout.activity(Activity::Yoga), ActivityEncoding::Unmapped);
        assert_eq!(layout.unmapped_activities(), vec![Activity::Yoga]);
    }

    #[test]
    fn numeric_columns_may_appear_in_any_order() {
        let columns: Vec<String> = ["Activity_Running", "MET", "Weight_kg", "Duration_min", "Height_cm", "HeartRate_bpm"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let layout = FeatureLayout::from_columns(&columns).unwrap();
        let scaled = NumericFeatures::from_values([1.0, 2.0, 3.0, 4.0, 5.0]);
        let row = layout.assemble(&columns, &scaled, Activity::Running);

        assert_eq!(row.values().to_vec(), vec![1.0, 5.0, 3.0, 1.0, 4.0, 2.0]);
        assert_eq!(row.as_matrix().shape(), &[1, 6]);
    }
}
