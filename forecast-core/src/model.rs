use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ForecastError;

/// Decoded Open-Meteo `/forecast` payload.
///
/// Only `hourly` is rendered; the metadata is kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub generationtime_ms: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f64,
    pub hourly_units: HourlyUnits,
    pub hourly: Hourly,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyUnits {
    pub time: String,
    pub temperature_2m: String,
    pub relative_humidity_2m: String,
    pub precipitation_probability: String,
    pub precipitation: String,
    pub weather_code: String,
    pub cloud_cover: String,
    pub wind_speed_10m: String,
}

/// Parallel hourly series, all indexed by position in `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hourly {
    #[serde(deserialize_with = "nullable_seq")]
    pub time: Vec<i64>,
    #[serde(deserialize_with = "nullable_seq")]
    pub temperature_2m: Vec<f64>,
    #[serde(deserialize_with = "nullable_seq")]
    pub relative_humidity_2m: Vec<i64>,
    #[serde(deserialize_with = "nullable_seq")]
    pub precipitation_probability: Vec<i64>,
    #[serde(deserialize_with = "nullable_seq")]
    pub precipitation: Vec<f32>,
    #[serde(deserialize_with = "nullable_seq")]
    pub weather_code: Vec<i64>,
    #[serde(deserialize_with = "nullable_seq")]
    pub cloud_cover: Vec<i64>,
    #[serde(deserialize_with = "nullable_seq")]
    pub wind_speed_10m: Vec<f32>,
}

/// One forecast hour, assembled from the parallel series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourRecord {
    /// Unix seconds.
    pub time: i64,
    pub temperature: f64,
    pub relative_humidity: i64,
    pub precipitation_probability: i64,
    pub precipitation: f32,
    pub weather_code: i64,
    pub cloud_cover: i64,
    pub wind_speed: f32,
}

impl Hourly {
    /// Number of forecast hours, as given by `time`.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Zips the series into per-hour records in their original order.
    ///
    /// Every series must have exactly as many entries as `time`.
    pub fn records(&self) -> Result<Vec<HourRecord>, ForecastError> {
        let expected = self.len();
        let lengths = [
            ("temperature_2m", self.temperature_2m.len()),
            ("relative_humidity_2m", self.relative_humidity_2m.len()),
            ("precipitation_probability", self.precipitation_probability.len()),
            ("precipitation", self.precipitation.len()),
            ("weather_code", self.weather_code.len()),
            ("cloud_cover", self.cloud_cover.len()),
            ("wind_speed_10m", self.wind_speed_10m.len()),
        ];

        if let Some(&(series, actual)) = lengths.iter().find(|(_, len)| *len != expected) {
            return Err(ForecastError::SeriesLength { series, expected, actual });
        }

        Ok((0..expected)
            .map(|i| HourRecord {
                time: self.time[i],
                temperature: self.temperature_2m[i],
                relative_humidity: self.relative_humidity_2m[i],
                precipitation_probability: self.precipitation_probability[i],
                precipitation: self.precipitation[i],
                weather_code: self.weather_code[i],
                cloud_cover: self.cloud_cover[i],
                wind_speed: self.wind_speed_10m[i],
            })
            .collect())
    }
}

/// Open-Meteo reports unavailable hours as `null`; those decode to the zero value.
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().map(Option::unwrap_or_default).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(hours: usize) -> Hourly {
        Hourly {
            time: (0..hours as i64).map(|h| h * 3600).collect(),
            temperature_2m: vec![10.5; hours],
            relative_humidity_2m: vec![57; hours],
            precipitation_probability: vec![20; hours],
            precipitation: vec![0.3; hours],
            weather_code: vec![3; hours],
            cloud_cover: vec![80; hours],
            wind_speed_10m: vec![7.2; hours],
        }
    }

    #[test]
    fn records_follow_time_order() {
        let records = hourly(72).records().expect("equal lengths");

        assert_eq!(records.len(), 72);
        assert!(records.windows(2).all(|w| w[0].time < w[1].time));
        assert_eq!(records[5].time, 5 * 3600);
        assert_eq!(records[5].relative_humidity, 57);
        assert_eq!(records[5].wind_speed, 7.2);
    }

    #[test]
    fn empty_series_give_no_records() {
        let records = Hourly::default().records().expect("all empty");
        assert!(records.is_empty());
    }

    #[test]
    fn short_series_is_reported() {
        let mut h = hourly(72);
        h.temperature_2m.truncate(70);

        match h.records() {
            Err(ForecastError::SeriesLength { series, expected, actual }) => {
                assert_eq!(series, "temperature_2m");
                assert_eq!(expected, 72);
                assert_eq!(actual, 70);
            }
            other => panic!("expected SeriesLength, got {other:?}"),
        }
    }

    #[test]
    fn longer_series_is_reported_too() {
        let mut h = hourly(3);
        h.cloud_cover.push(10);

        let err = h.records().unwrap_err();
        assert!(err.to_string().contains("cloud_cover"));
    }
}
