use derive_more::Display;
use log::info;
use serde::{Deserialize, Serialize};

use loader::ObservationPairs;

use crate::estimator::ols::{self, EstimationError};
use crate::estimator::Estimator;

#[derive(Debug, Display, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[display("y = {slope} * x + {intercept}")]
pub struct LinearRegressionEstimator {
    slope: f64,
    intercept: f64,
}

impl LinearRegressionEstimator {
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl<'de> Estimator<'de> for LinearRegressionEstimator {
    type Error = EstimationError;

    fn build(data: &ObservationPairs) -> Result<Self, EstimationError> {
        let (slope, intercept) = ols::fit(data.x(), data.y())?;

        info!("Fitted {} observation pairs: y = {} * x + {}", data.len(), slope, intercept);
        Ok(Self { slope, intercept })
    }

    fn estimate(&self, x: f64) -> f64 {
        ols::predict(self.slope, self.intercept, x)
    }
}
