use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{config::ForecastConfig, error::ForecastError};

use super::ForecastProvider;

/// Hourly forecast from the Open-Meteo `/forecast` endpoint. No API key needed.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    config: ForecastConfig,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let http = Client::builder().build().map_err(ForecastError::Network)?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch(&self) -> Result<Vec<u8>, ForecastError> {
        debug!(url = %self.config.endpoint_url(), "requesting hourly forecast");

        let res = self
            .http
            .get(self.config.forecast_url())
            .query(&self.config.query_pairs())
            .send()
            .await
            .map_err(ForecastError::Network)?;

        let status = res.status();
        debug!(%status, "forecast response received");

        if status != StatusCode::OK {
            return Err(ForecastError::Status(status));
        }

        // `bytes` consumes the response, so the connection is released on both outcomes.
        let body = res.bytes().await.map_err(ForecastError::Read)?;
        debug!(bytes = body.len(), "forecast body read");

        Ok(body.to_vec())
    }
}
