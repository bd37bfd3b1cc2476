//! Portal Report CLI Tool
//!
//! Compute longevity reports and resolve dashboard tabs from a portal
//! data directory.
//!
//! Usage:
//!   portal-report score <patient-id> [--as-of <date>]
//!   portal-report tabs
//!   portal-report render <tab-key> --patient <id>

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use portal_data::{telemetry, FileDataSource, PortalClient, PortalConfig, RetryPolicy};
use std::fs;
use std::path::PathBuf;
use tab_resolver::{standard_registry, PatientContext};

#[derive(Parser)]
#[command(name = "portal-report")]
#[command(author = "Longevity Portal")]
#[command(version = "0.1.0")]
#[command(about = "Longevity reports and tab resolution for the patient portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory, overriding the configured one
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Output format: json or compact
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Longevity report for one patient
    Score {
        /// Patient identifier
        patient_id: String,

        /// Compute ages as of this date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Effective tab list
    Tabs,

    /// Render one tab for a patient
    Render {
        /// Tab key
        tab_key: String,

        /// Patient identifier
        #[arg(short, long)]
        patient: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = PortalConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    telemetry::init_tracing(&config.log_filter);
    tracing::info!(data_dir = %config.data_dir.display(), "portal-report starting");

    let source =
        FileDataSource::new(&config.data_dir).with_retry(RetryPolicy::from(&config.retry));
    let client = PortalClient::new(source, standard_registry());

    let result: serde_json::Value = match cli.command {
        Commands::Score { patient_id, as_of } => {
            let today = as_of.unwrap_or_else(|| Utc::now().date_naive());
            let report = client.longevity_report(&patient_id, today)?;
            tracing::info!(
                patient_id = %patient_id,
                score = report.longevity_score,
                band = report.band.label(),
                "longevity report computed"
            );
            serde_json::to_value(report)?
        }
        Commands::Tabs => serde_json::to_value(client.tabs().tabs())?,
        Commands::Render { tab_key, patient } => {
            let ctx = PatientContext::new(patient);
            let payload = client
                .render_tab(&tab_key, &ctx)
                .ok_or_else(|| format!("no visible tab with key '{}'", tab_key))?;
            serde_json::to_value(payload)?
        }
    };

    // Output result
    let output_str = match cli.format.as_str() {
        "compact" => serde_json::to_string(&result)?,
        _ => serde_json::to_string_pretty(&result)?,
    };

    if let Some(output_path) = cli.output {
        fs::write(&output_path, &output_str)?;
        eprintln!("Output written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
