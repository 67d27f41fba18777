use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use falcon_risk::FlightRiskInput;

use crate::error::CliError;

/// Flight delay risk from the command line.
///
/// `predict` asks the API and falls back to a local simulation when the API
/// cannot be reached; `simulate` always scores locally.
#[derive(Debug, Parser)]
#[command(name = "falcon-delay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the API, including the `/api` prefix
    #[arg(long, env = "FALCON_API_URL", default_value = "http://localhost:5000/api", global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "FALCON_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout: u64,

    /// Seed for the local base-risk generator
    #[arg(long, env = "RISK_SEED", global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a flight via the API, simulating locally if it is unavailable
    Predict(FlightArgs),
    /// Score a flight locally without contacting the API
    Simulate(FlightArgs),
    /// Check that the API is up
    Health,
}

#[derive(Debug, Default, Args)]
pub struct FlightArgs {
    /// JSON file with the flight; flags below override its fields
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub airline: Option<String>,

    /// Origin airport code, e.g. JFK
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination airport code, e.g. LAX
    #[arg(long)]
    pub dest: Option<String>,

    /// Departure time, e.g. 2024-07-15T08:00
    #[arg(long)]
    pub departure: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// Temperature in °F
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Wind speed in mph
    #[arg(long, allow_negative_numbers = true)]
    pub wind_speed: Option<f64>,

    /// Visibility in miles
    #[arg(long, allow_negative_numbers = true)]
    pub visibility: Option<f64>,

    /// Precipitation intensity, 0 to 1
    #[arg(long, allow_negative_numbers = true)]
    pub precipitation: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub origin_congestion: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub dest_congestion: Option<f64>,
}

impl FlightArgs {
    /// Build the request body: file contents first, then flag overrides.
    pub fn into_input(self) -> Result<FlightRiskInput, CliError> {
        let mut input = match &self.file {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&raw)?
            }
            None => FlightRiskInput::default(),
        };

        override_with(&mut input.airline, self.airline);
        override_with(&mut input.origin_code, self.origin);
        override_with(&mut input.dest_code, self.dest);
        override_with(&mut input.departure_time, self.departure);
        override_with(&mut input.distance, self.distance);
        override_with(&mut input.temperature, self.temperature);
        override_with(&mut input.wind_speed, self.wind_speed);
        override_with(&mut input.visibility, self.visibility);
        override_with(&mut input.precipitation, self.precipitation);
        override_with(&mut input.origin_congestion, self.origin_congestion);
        override_with(&mut input.dest_congestion, self.dest_congestion);

        Ok(input)
    }
}

fn override_with<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_flags_parse() {
        let cli = Cli::parse_from([
            "falcon-delay",
            "--api-url",
            "http://example.test/api",
            "predict",
            "--origin",
            "JFK",
            "--dest",
            "LAX",
            "--temperature",
            "-5",
            "--wind-speed",
            "30",
        ]);
        assert_eq!(cli.api_url, "http://example.test/api");
        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let input = args.into_input().unwrap();
        assert_eq!(input.origin_code.as_deref(), Some("JFK"));
        assert_eq!(input.temperature, Some(-5.0));
        assert_eq!(input.wind_speed, Some(30.0));
        assert!(input.airline.is_none());
    }

    #[test]
    fn negative_weather_values_parse() {
        let cli = Cli::try_parse_from([
            "falcon-delay",
            "simulate",
            "--wind-speed",
            "-3",
            "--visibility",
            "-1",
            "--precipitation",
            "-0.5",
            "--distance",
            "-10",
            "--origin-congestion",
            "-0.2",
            "--dest-congestion",
            "-0.4",
        ])
        .expect("negative values are passed through");
        let Commands::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        let input = args.into_input().unwrap();
        assert_eq!(input.wind_speed, Some(-3.0));
        assert_eq!(input.visibility, Some(-1.0));
        assert_eq!(input.precipitation, Some(-0.5));
        assert_eq!(input.distance, Some(-10.0));
        assert_eq!(input.origin_congestion, Some(-0.2));
        assert_eq!(input.dest_congestion, Some(-0.4));
    }

    #[test]
    fn flags_override_file_fields() {
        let path = std::env::temp_dir().join(format!("falcon-flight-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"airline":"DL","originCode":"ATL","destCode":"ORD","windSpeed":15}"#,
        )
        .unwrap();

        let args = FlightArgs {
            file: Some(path.clone()),
            dest: Some("MIA".to_string()),
            ..Default::default()
        };
        let input = args.into_input().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(input.airline.as_deref(), Some("DL"));
        assert_eq!(input.origin_code.as_deref(), Some("ATL"));
        assert_eq!(input.dest_code.as_deref(), Some("MIA"));
        assert_eq!(input.wind_speed, Some(15.0));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let args = FlightArgs {
            file: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        assert!(matches!(args.into_input(), Err(CliError::Io { .. })));
    }
}
