use log::debug;

use loader::{ObservationPairs, PairLoader};

use crate::estimator::ols::{self, EstimationError};
use crate::estimator::{Estimator, LinearRegressionEstimator};

/// Least-squares line fitted to pairs pulled from a [`PairLoader`].
///
/// The observations are owned and never change after load. Every query is
/// recomputed from them, so an inconsistent dataset (mismatched lengths,
/// identical predictors) is reported on each call that needs the fit.
#[derive(Debug)]
pub struct SimpleLinearRegression {
    pairs: ObservationPairs,
}

impl SimpleLinearRegression {
    pub fn new<L: PairLoader>(source: &str, loader: L) -> Result<Self, L::Error> {
        let pairs = loader.load(source)?;
        debug!("Regression over {} observation pairs from {}", pairs.len(), source);
        Ok(Self::from_pairs(pairs))
    }

    pub fn from_pairs(pairs: ObservationPairs) -> Self {
        SimpleLinearRegression { pairs }
    }

    pub fn pairs(&self) -> &ObservationPairs {
        &self.pairs
    }

    pub fn get_x_bar(&self) -> Result<f64, EstimationError> {
        ols::mean(self.pairs.x())
    }

    pub fn get_y_bar(&self) -> Result<f64, EstimationError> {
        ols::mean(self.pairs.y())
    }

    pub fn get_slope(&self) -> Result<f64, EstimationError> {
        ols::slope(self.pairs.x(), self.pairs.y())
    }

    pub fn get_y_intercept(&self) -> Result<f64, EstimationError> {
        ols::intercept(self.pairs.x(), self.pairs.y())
    }

    /// Expected response at `x` on the fitted line.
    pub fn predict_value(&self, x: f64) -> Result<f64, EstimationError> {
        let estimator = self.estimator()?;
        let y = estimator.estimate(x);
        debug!("Predicted {} for {}", y, x);
        Ok(y)
    }

    pub fn estimator(&self) -> Result<LinearRegressionEstimator, EstimationError> {
        LinearRegressionEstimator::build(&self.pairs)
    }
}
