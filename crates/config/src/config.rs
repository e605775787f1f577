use derive_more::{Display, From};
use serde::Deserialize;
use serde_valid::yaml::FromYamlStr;
use serde_valid::Validate;

// Config Type
#[derive(Debug)]
pub struct Config {
    // Where the observation pairs are read from
    pub dataset: DatasetConfig,
    // Predictor values to evaluate on the fitted line
    pub prediction: PredictionConfig,
}

impl Config {
    pub fn from_file(file_path: &str) -> Result<Self, ConfigError> {
        let config_file_content = std::fs::read_to_string(file_path)?;
        Self::from_yaml_str(&config_file_content)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let raw_config = RawConfig::from_yaml_str(s)?;

        if let Some(value) = raw_config.prediction.x_values.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinitePredictionValue(*value));
        }

        Ok(Config { dataset: raw_config.dataset, prediction: raw_config.prediction })
    }
}

#[derive(Debug, From, Display)]
pub enum ConfigError {
    #[display("Prediction value is not finite: {}", _0)]
    #[from(ignore)]
    NonFinitePredictionValue(f64),

    #[display("Serde Error: {}", _0)]
    SerdeError(serde_valid::Error<serde_yaml::Error>),

    #[display("Error Reading Config File: {}", _0)]
    IoError(std::io::Error),
}

impl std::error::Error for ConfigError {}

// Intermediate Config Type as Deserialization Target
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[validate]
    pub dataset: DatasetConfig,
    #[validate]
    #[serde(default)]
    pub prediction: PredictionConfig,
}

#[derive(Debug, Deserialize, Validate, Clone)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    // Path of the comma separated x,y file
    #[validate(min_length = 1)]
    pub path: String,
}

#[derive(Debug, Deserialize, Validate, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct PredictionConfig {
    // Values of the predictor to estimate the response for
    #[serde(default)]
    pub x_values: Vec<f64>,
}

pub fn get_sample_config() -> Config {
    Config::from_file("../../config.yaml.example").unwrap()
}
