use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a forecast from being rendered.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// DNS failure, refused connection, or a client that could not be built.
    #[error("Failed to reach the forecast service")]
    Network(#[source] reqwest::Error),

    #[error("Weather api not available! (HTTP {0})")]
    Status(StatusCode),

    #[error("Failed to read the forecast response body")]
    Read(#[source] reqwest::Error),

    #[error("Failed to decode forecast JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// One hourly series does not line up with `time`.
    #[error("Hourly series `{series}` has {actual} entries, expected {expected}")]
    SeriesLength {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}
