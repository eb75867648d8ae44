use chrono::{Local, TimeZone};
use std::fmt::Display;

use crate::{
    error::ForecastError,
    model::{ForecastResponse, HourRecord},
    table::{Cell, Table},
};

/// Column labels, in order. "CLOUDE" is the established label and is kept as is.
pub const HEADER: [&str; 8] = [
    "TIME", "TEMP", "HUMIDITY", "PREC %", "PREC mm", "CODE", "CLOUDE", "WIND",
];

/// Builds the hourly table with times shown in the system time zone.
pub fn forecast_table(forecast: &ForecastResponse) -> Result<Table, ForecastError> {
    forecast_table_in(forecast, &Local)
}

pub fn forecast_table_in<Tz>(forecast: &ForecastResponse, tz: &Tz) -> Result<Table, ForecastError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut table = Table::new(HEADER.iter().map(|label| Cell::center(*label)).collect());

    for record in forecast.hourly.records()? {
        table.push_row(hour_row(&record, tz)?);
    }

    Ok(table)
}

/// Formats a Unix timestamp as zero-padded 24h "HH:MM" in `tz`.
pub fn clock_label<Tz>(timestamp: i64, tz: &Tz) -> Result<String, ForecastError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let at = tz
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or(ForecastError::InvalidTimestamp(timestamp))?;

    Ok(at.format("%H:%M").to_string())
}

fn hour_row<Tz>(record: &HourRecord, tz: &Tz) -> Result<Vec<Cell>, ForecastError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Float `Display` never switches to exponent form; tiny values print in full.
    Ok(vec![
        Cell::new(clock_label(record.time, tz)?),
        Cell::right(record.temperature.to_string()),
        Cell::right(format!("{}°", record.relative_humidity)),
        Cell::right(format!("{} %", record.precipitation_probability)),
        Cell::right(format!("{}mm", record.precipitation)),
        Cell::right(record.weather_code.to_string()),
        Cell::right(format!("{} %", record.cloud_cover)),
        Cell::right(record.wind_speed.to_string()),
    ])
}
