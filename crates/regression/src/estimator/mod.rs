use std::error::Error;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use loader::ObservationPairs;

pub use linear_regression_estimator::LinearRegressionEstimator;
pub use ols::EstimationError;

pub mod linear_regression_estimator;
pub mod ols;

pub trait Estimator<'de>: Serialize + Deserialize<'de> + Debug {
    type Error: Error + Debug;

    fn build(data: &ObservationPairs) -> Result<Self, Self::Error>;

    fn estimate(&self, x: f64) -> f64;
}
