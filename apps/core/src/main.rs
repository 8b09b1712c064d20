// Wellness bot CLI entry point.
// Runs the scoring and analytics service against the configured SQLite store
// and prints JSON results.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wellness_core::config::{AppConfig, LogFormat};
use wellness_core::models::AnalyzeRequest;
use wellness_core::store::SqliteInteractionStore;
use wellness_core::WellnessService;

#[derive(Debug, Parser)]
#[command(name = "wellness", version, about = "Stress scoring and burnout analytics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a message and store the interaction.
    Analyze {
        /// Message text.
        text: String,
        #[arg(long, default_value = "anonymous")]
        user: String,
    },
    /// Totals, stress distribution and daily average score.
    Summary,
    /// Most recent interactions, newest first.
    Recent {
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Burnout risk for a user over a trailing window.
    Risk {
        user: String,
        #[arg(long, allow_negative_numbers = true)]
        window_days: Option<i64>,
    },
    /// Liveness report.
    Health,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    // Logs go to stderr so stdout stays valid JSON.
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(config.log_format);

    config.ensure_data_dir()?;
    let store = SqliteInteractionStore::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open interaction store")?;
    let service = WellnessService::with_config(Arc::new(store), &config);

    info!(command = ?cli.command, "Running command");

    match cli.command {
        Command::Analyze { text, user } => {
            print_json(&service.analyze(AnalyzeRequest::for_user(text, user)).await?)
        }
        Command::Summary => print_json(&service.summary().await?),
        Command::Recent { limit } => print_json(&service.recent(limit).await?),
        Command::Risk { user, window_days } => {
            print_json(&service.burnout_risk(&user, window_days).await?)
        }
        Command::Health => print_json(&service.health()),
    }
}
