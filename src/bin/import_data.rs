//! Imports training events into the prediction server.
//!
//! Replays every line of the training CSV as one create-event call against
//! the server's event API.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reccom_api::services::events::PredictionEventClient;
use reccom_api::services::import::import_events;

#[derive(Parser, Debug)]
#[command(name = "import_data")]
#[command(about = "Import sample data for the recommendation engine")]
struct Args {
    /// Access key for the event API
    #[arg(long = "access_key", default_value = "invalid_access_key")]
    access_key: String,

    /// Base URL of the event server
    #[arg(long, default_value = "http://localhost:7070")]
    url: String,

    /// Training CSV of events, one per line (no header)
    #[arg(long, default_value = "forks_stars_sample_prepared_train.csv")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reccom_api=info,import_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let client = PredictionEventClient::new(&args.url, &args.access_key)?;
    let count = import_events(&client, &args.file)
        .await
        .context("import failed")?;
    tracing::info!("{} events imported", count);

    Ok(())
}
