use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::PredictionLine;
use crate::services::prediction::QueryClient;

/// Exports one prediction line per distinct user in a training CSV
///
/// Reads `file_i` (header skipped, first comma-delimited field is the user
/// id), deduplicates the users, queries the recommender once per user and
/// appends `{"user_id":...,"rec":<itemScores>}` lines to `file_o`. The
/// output file is opened in append mode, so repeated runs accumulate.
///
/// Users whose response body is shorter than two bytes have no prediction
/// and are skipped. A network failure aborts the whole batch; lines
/// already written are flushed and survive.
///
/// Returns the number of lines written.
pub async fn export_predictions(
    client: &dyn QueryClient,
    file_i: &Path,
    file_o: &Path,
) -> AppResult<usize> {
    let input = BufReader::new(File::open(file_i)?);
    let mut users = HashSet::new();
    for line in input.lines().skip(1) {
        let line = line?;
        users.insert(line.split(',').next().unwrap_or_default().to_string());
    }

    let output = OpenOptions::new().create(true).append(true).open(file_o)?;
    let mut writer = BufWriter::new(output);

    let mut written = 0;
    for user in &users {
        let body = client.query(user).await?;
        if body.len() < 2 {
            debug!(user = %user, "no prediction available, skipping");
            continue;
        }

        let response: Value = serde_json::from_str(&body)?;
        let rec = response.get("itemScores").cloned().ok_or_else(|| {
            AppError::ExternalApi(format!("response for user {user} has no itemScores field"))
        })?;

        let record = PredictionLine {
            user_id: user.clone(),
            rec,
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        written += 1;
    }

    info!(users = users.len(), written, "export finished");
    Ok(written)
}
