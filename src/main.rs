//! Wi-Fi Credentials - Main Entry Point

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wifi_credentials::{
    config::{Action, CliArgs, OutputFormat, Settings},
    core::report::CredentialReport,
};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so the report on stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,wifi_credentials=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from(CliArgs::parse());
    debug!(?settings, "Parsed settings");

    if settings.overridden {
        info!("Using candidate credentials from command line or environment");
    }
    if settings.reveal {
        warn!("Passphrases will be printed in clear text");
    }

    let report = CredentialReport::from_set(&settings.credentials(), settings.reveal);

    let rendered = match settings.format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json()?,
    };
    println!("{rendered}");

    match settings.action {
        Action::Show => Ok(ExitCode::SUCCESS),
        Action::Check if report.valid => {
            info!("All credentials passed checks");
            Ok(ExitCode::SUCCESS)
        }
        Action::Check => {
            error!(
                problems = report.problem_count(),
                "Credentials failed checks"
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
