//! Error types for the Sleeper fantasy helper CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HelperError>;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("GET {url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("GET {url} failed after {attempts} rate-limited attempts")]
    FetchExhausted { url: String, attempts: u32 },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Invalid league ID: {value}")]
    InvalidLeagueId { value: String },

    #[error("Data shape error: {message}")]
    DataShape { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}
