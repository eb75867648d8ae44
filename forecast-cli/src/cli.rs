use anyhow::Context;
use clap::{ArgAction, Parser};
use forecast_core::{ForecastConfig, ForecastProvider, OpenMeteoProvider, render};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Prints the 3-day hourly forecast for Milan as a table"
)]
pub struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_logging(self.verbose);

        let provider = default_provider()?;
        show_forecast(&provider, &mut io::stdout()).await
    }
}

/// The fixed Open-Meteo endpoint; nothing is read from disk or the environment.
fn default_provider() -> anyhow::Result<OpenMeteoProvider> {
    OpenMeteoProvider::new(ForecastConfig::default()).context("Failed to set up the HTTP client")
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_filter(verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Fetches, decodes and renders the forecast, then writes it to `out`.
///
/// Nothing is written unless every step succeeds.
pub async fn show_forecast<W: Write>(
    provider: &dyn ForecastProvider,
    out: &mut W,
) -> anyhow::Result<()> {
    let forecast = provider.forecast().await?;
    let table = render::forecast_table(&forecast)?;
    info!(rows = table.len(), timezone = %forecast.timezone, "rendering forecast");

    writeln!(out, "{table}").context("Failed to write forecast table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clap::CommandFactory;
    use forecast_core::{ForecastError, StatusCode};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    #[derive(Debug)]
    enum Canned {
        Body(&'static str),
        NotFound,
    }

    #[derive(Debug)]
    struct CannedProvider(Canned);

    #[async_trait]
    impl ForecastProvider for CannedProvider {
        async fn fetch(&self) -> Result<Vec<u8>, ForecastError> {
            match self.0 {
                Canned::Body(body) => Ok(body.as_bytes().to_vec()),
                Canned::NotFound => Err(ForecastError::Status(StatusCode::NOT_FOUND)),
            }
        }
    }

    const TWO_HOURS: &str = r#"{
        "timezone": "GMT",
        "hourly": {
            "time": [1717200000, 1717203600],
            "temperature_2m": [18.2, 17.9],
            "relative_humidity_2m": [71, 74],
            "precipitation_probability": [5, 10],
            "precipitation": [0.0, 0.4],
            "weather_code": [2, 61],
            "cloud_cover": [45, 90],
            "wind_speed_10m": [4.3, 3.8]
        }
    }"#;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn runs_without_arguments() {
        let cli = Cli::try_parse_from(["forecast"]).expect("no args needed");
        assert_eq!(cli.verbose, 0);

        let cli = Cli::try_parse_from(["forecast", "-vv"]).expect("verbosity flag");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn default_provider_targets_fixed_endpoint() {
        let provider = default_provider().expect("client builds");
        assert_eq!(provider.config(), &ForecastConfig::default());
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(9), "trace");
    }

    #[tokio::test]
    async fn prints_one_line_per_hour() {
        let mut out = Vec::new();
        show_forecast(&CannedProvider(Canned::Body(TWO_HOURS)), &mut out)
            .await
            .expect("table");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.ends_with("╝\n"));
        // top, header, divider, two hours, bottom
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("0.4mm"));
        assert!(text.contains("90 %"));
    }

    #[tokio::test]
    async fn bad_status_prints_nothing() {
        let mut out = Vec::new();
        let err = show_forecast(&CannedProvider(Canned::NotFound), &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Weather api not available!"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_prints_nothing() {
        let mut out = Vec::new();
        let err = show_forecast(&CannedProvider(Canned::Body("not json")), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<ForecastError>(), Some(ForecastError::Decode(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn mismatched_series_print_nothing() {
        let body = r#"{"hourly": {"time": [0, 3600], "temperature_2m": [1.0]}}"#;
        let mut out = Vec::new();
        let err = show_forecast(&CannedProvider(Canned::Body(body)), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ForecastError>(),
            Some(ForecastError::SeriesLength { series: "temperature_2m", .. })
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn body_cut_short_prints_nothing() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n{")
                .await
                .expect("write response");
            socket.shutdown().await.expect("shutdown");
        });

        let provider = OpenMeteoProvider::new(ForecastConfig::with_base_url(format!("http://{addr}")))
            .expect("client builds");
        let mut out = Vec::new();
        let err = show_forecast(&provider, &mut out).await.unwrap_err();

        assert!(matches!(err.downcast_ref::<ForecastError>(), Some(ForecastError::Read(_))));
        assert!(out.is_empty());
    }
}
