use std::error::Error;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub use csv_loader::CsvPairLoader;
pub use errors::LoadError;

pub mod csv_loader;
pub mod errors;


// Two sequences paired by index: x[i] and y[i] come from the same record.
// Lengths are not checked here, the estimator reports a mismatch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservationPairs {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ObservationPairs {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ObservationPairs { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Source of paired observations, injected into the estimator so tests can
/// substitute fixed in-memory data.
pub trait PairLoader {
    type Error: Error + Debug;

    fn load(&self, source: &str) -> Result<ObservationPairs, Self::Error>;
}
