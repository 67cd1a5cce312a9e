//! Exports recommendations for every user in a training CSV.
//!
//! Queries the prediction server once per distinct user and appends
//! line-delimited JSON predictions to the output file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reccom_api::services::export::export_predictions;
use reccom_api::services::prediction::PredictionQueryClient;

#[derive(Parser, Debug)]
#[command(name = "export_rec")]
#[command(about = "Export recommendations from the prediction server")]
struct Args {
    /// Training CSV to read user ids from (header skipped)
    #[arg(long = "file_i", default_value = "./data/forks_stars_sample_train.csv")]
    file_i: PathBuf,

    /// Output file for line-delimited JSON predictions (appended to)
    #[arg(
        long = "file_o",
        default_value = "./data/forks_stars_sample_ur_predictions_train.json"
    )]
    file_o: PathBuf,

    /// Query endpoint of the prediction server
    #[arg(long, default_value = "http://localhost:8000/queries.json")]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reccom_api=info,export_rec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let client = PredictionQueryClient::new(&args.url)?;
    let written = export_predictions(&client, &args.file_i, &args.file_o)
        .await
        .context("export failed")?;
    tracing::info!("{} predictions exported", written);

    Ok(())
}
