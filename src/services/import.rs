use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::Event;
use crate::services::events::EventClient;

/// Replays a training CSV as create-event calls, one per line
///
/// Every line is an event (no header): field 0 is the user id, field 1 the
/// item id and field 3 the event type. Events carry no timestamp. A failed
/// call aborts the batch.
///
/// Returns the number of events imported.
pub async fn import_events(client: &dyn EventClient, file: &Path) -> AppResult<usize> {
    let input = BufReader::new(File::open(file)?);

    info!("importing events from {}", file.display());
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 4 {
            return Err(AppError::InvalidInput(format!(
                "expected at least 4 comma-separated fields, got {}: {line:?}",
                fields.len()
            )));
        }

        let event = Event::user_item(fields[3], fields[0], fields[1]);
        client.create_event(&event).await?;
        info!(
            event = %event.event,
            entity_id = %event.entity_id,
            target_entity_id = %event.target_entity_id,
            "event imported"
        );
        count += 1;
    }

    info!("{} events imported", count);
    Ok(count)
}
