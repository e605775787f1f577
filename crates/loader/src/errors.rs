use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not open source {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Record {record} could not be parsed: {message}")]
    Parse { record: usize, message: String },
}
