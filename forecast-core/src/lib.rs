//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Endpoint configuration
//! - The forecast provider seam (fetch + decode)
//! - The decoded Open-Meteo data model
//! - Table rendering of the hourly series
//!
//! It is used by `forecast-cli`, but the renderer and decoder do not depend on it.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod table;

pub use config::ForecastConfig;
pub use error::ForecastError;
pub use model::{ForecastResponse, HourRecord, Hourly, HourlyUnits};
pub use provider::{ForecastProvider, decode, open_meteo::OpenMeteoProvider};
pub use table::{Align, Cell, Table};

/// Re-exported so callers can build and match `ForecastError::Status`.
pub use reqwest::StatusCode;
