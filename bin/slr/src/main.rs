use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use config::Config;
use loader::CsvPairLoader;

mod utils;

#[derive(Parser, Debug)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Dataset path, overrides `dataset.path`
    #[arg(short, long)]
    dataset: Option<String>,

    /// Predictor value to estimate, overrides `prediction.x_values` (repeatable)
    #[arg(short, long = "predict", allow_negative_numbers = true)]
    predict: Vec<f64>,
}

fn main() -> ExitCode {
    if let Err(e) = simple_logger::SimpleLogger::new().env().init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let args = Args::parse();
    debug!("Args: {:?}", args);

    // Load configuration from yaml
    let mut config = match Config::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config file {}: {}", args.config, e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }
    if !args.predict.is_empty() {
        config.prediction.x_values = args.predict;
    }

    match utils::fit_and_predict(&config, CsvPairLoader::new()) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{}", json);
                info!("Regression completed");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("Regression failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
