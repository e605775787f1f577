pub use config::{get_sample_config, Config, ConfigError, DatasetConfig, PredictionConfig};

pub mod config;
