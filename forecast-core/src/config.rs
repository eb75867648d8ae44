use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_LATITUDE: f64 = 45.4918;
pub const DEFAULT_LONGITUDE: f64 = 9.2981;
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

/// Hourly variables requested from Open-Meteo, in table column order.
pub const HOURLY_VARIABLES: [&str; 7] = [
    "temperature_2m",
    "relative_humidity_2m",
    "precipitation_probability",
    "precipitation",
    "weather_code",
    "cloud_cover",
    "wind_speed_10m",
];

/// Everything needed to build the forecast request.
///
/// `Default` is the fixed Milan endpoint: 3 days of hourly data with Unix
/// timestamps. Tests swap `base_url` for a mock server. No timeout is set;
/// the HTTP client's own default applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: Vec<String>,
    pub forecast_days: u8,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            hourly: HOURLY_VARIABLES.iter().map(|v| (*v).to_string()).collect(),
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl ForecastConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("hourly", self.hourly.join(",")),
            ("timeformat", "unixtime".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ]
    }

    /// Full request URL, unencoded. Only used for diagnostics.
    pub fn endpoint_url(&self) -> String {
        let query = self
            .query_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.forecast_url(), query)
    }
}
