pub use estimator::{EstimationError, Estimator, LinearRegressionEstimator};
pub use simple_linear_regression::SimpleLinearRegression;

pub mod estimator;
pub mod simple_linear_regression;
