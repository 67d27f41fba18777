mod cli;
mod client;
mod error;
mod fallback;

use std::process::ExitCode;

use clap::Parser;
use falcon_config::init_tracing;
use falcon_risk::{RiskAssessment, RiskConfig, RiskEngine};

use cli::{Cli, Commands};
use client::{ClientConfig, PredictionClient};
use error::CliError;
use fallback::{predict_or_simulate, SIMULATED_NOTICE};

fn print_assessment(assessment: &RiskAssessment) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(assessment)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let engine = RiskEngine::from_seed(RiskConfig::default(), cli.seed);
    let client = PredictionClient::new(ClientConfig {
        base_url: cli.api_url.clone(),
        timeout_secs: cli.timeout,
    })
    .map_err(|e| CliError::Client(e.into()))?;

    match cli.command {
        Commands::Predict(args) => {
            let input = args.into_input()?;
            let prediction = predict_or_simulate(&client, &engine, &input).await;
            if prediction.simulated {
                eprintln!("{SIMULATED_NOTICE}");
            }
            print_assessment(&prediction.assessment)
        }
        Commands::Simulate(args) => {
            let input = args.into_input()?;
            print_assessment(&engine.assess(&input))
        }
        Commands::Health => {
            let health = client.health().await?;
            println!("{} ({})", health.status, cli.api_url);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing("warn");
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
