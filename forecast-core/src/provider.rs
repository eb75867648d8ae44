use crate::{error::ForecastError, model::ForecastResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Source of raw forecast payloads.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Performs the request and returns the full response body.
    async fn fetch(&self) -> Result<Vec<u8>, ForecastError>;

    async fn forecast(&self) -> Result<ForecastResponse, ForecastError> {
        let body = self.fetch().await?;
        decode(&body)
    }
}

/// Decodes a `/forecast` JSON body.
///
/// Unknown keys are ignored and missing keys take zero values; malformed JSON
/// or a value of the wrong type is an error.
pub fn decode(bytes: &[u8]) -> Result<ForecastResponse, ForecastError> {
    Ok(serde_json::from_slice(bytes)?)
}
