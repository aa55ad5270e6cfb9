//! Per-session view state of the dashboard.
//!
//! The result variant owns the input snapshot, the BMI, the prediction and
//! whether the model saw the activity, so they can only ever be replaced as
//! one value.

use serde::{Deserialize, Serialize};

use crate::bmi::BmiResult;
use crate::{PredictionResult, UserInput};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Empty,
    Result {
        input: UserInput,
        bmi: BmiResult,
        prediction: PredictionResult,
        /// False when the model had no column for the selected activity.
        activity_encoded: bool,
    },
}

impl ViewState {
    /// State after an analysis completes. Assigning it discards any previous
    /// result whole.
    pub fn result(
        input: UserInput,
        bmi: BmiResult,
        prediction: PredictionResult,
        activity_encoded: bool,
    ) -> Self {
        ViewState::Result {
            input,
            bmi,
            prediction,
            activity_encoded,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }
}
