use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// A trained model mapping feature rows to one output per row.
pub trait Regressor: Send + Sync {
    fn predict(&self, rows: ArrayView2<'_, f64>) -> Result<Array1<f64>, ModelError>;
}

/// Ordinary linear model exported as an intercept and one coefficient per
/// column of the feature layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearRegressor {
    fn predict(&self, rows: ArrayView2<'_, f64>) -> Result<Array1<f64>, ModelError> {
        if rows.ncols() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: rows.ncols(),
            });
        }
        let coefficients = ArrayView1::from(self.coefficients.as_slice());
        Ok(rows.dot(&coefficients) + self.intercept)
    }
}
