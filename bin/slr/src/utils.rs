use log::info;
use serde::Serialize;
use thiserror::Error;

use config::Config;
use loader::PairLoader;
use regression::{EstimationError, Estimator, LinearRegressionEstimator, SimpleLinearRegression};

#[derive(Debug, Serialize, PartialEq)]
pub struct Prediction {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub observations: usize,
    pub x_bar: f64,
    pub y_bar: f64,
    pub model: LinearRegressionEstimator,
    pub predictions: Vec<Prediction>,
}

pub fn fit_and_predict<Loader: PairLoader>(
    config: &Config,
    loader: Loader,
) -> Result<Report, RunErr<Loader::Error>> {
    let slr = SimpleLinearRegression::new(&config.dataset.path, loader)
        .map_err(RunErr::LoadErr)?;

    let x_bar = slr.get_x_bar()?;
    let y_bar = slr.get_y_bar()?;
    info!("x̄ = {}, ȳ = {}", x_bar, y_bar);

    let model = slr.estimator()?;
    info!("Fitted line: {}", model);

    let predictions = config
        .prediction
        .x_values
        .iter()
        .map(|x| Prediction { x: *x, y: model.estimate(*x) })
        .collect();

    Ok(Report { observations: slr.pairs().len(), x_bar, y_bar, model, predictions })
}

#[derive(Error, Debug)]
pub enum RunErr<T: std::error::Error> {
    #[error("Failed to load observation pairs: {0}")]
    LoadErr(T),

    #[error("Failed to fit regression: {0}")]
    EstimationErr(#[from] EstimationError),
}
