use serde_json::Value;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{LinksPayload, RecRow, Recommendations, ScoresPayload, Strategy};

/// Looks up precomputed recommendations for one identifier
///
/// Fetches every row whose `name` column equals the given identifier and
/// normalizes the stored payloads:
/// - zero rows → [`Recommendations::NoMatch`]
/// - a row whose links document is empty → [`Recommendations::NoResult`]
/// - otherwise → [`Recommendations::Found`] with the `links` array taken
///   from the links document and the `scores` array from the scores
///   document
///
/// Identifier uniqueness is not enforced by the store; when several rows
/// match, the last row returned wins and row order is whatever SQLite
/// yields. A `None` identifier binds SQL NULL, which matches no row.
pub async fn lookup(
    pool: &SqlitePool,
    strategy: Strategy,
    name: Option<&str>,
) -> AppResult<Recommendations> {
    let sql = format!(
        "SELECT links, scores FROM {} WHERE name = ?",
        strategy.table()
    );
    let rows: Vec<RecRow> = sqlx::query_as(&sql).bind(name).fetch_all(pool).await?;

    let mut result = Recommendations::NoMatch;
    for row in rows {
        let links_doc: Value = serde_json::from_str(&row.links)?;
        let scores_doc: Value = serde_json::from_str(&row.scores)?;
        if is_empty(&links_doc) {
            result = Recommendations::NoResult;
        } else {
            let links: LinksPayload = serde_json::from_value(links_doc)?;
            let scores: ScoresPayload = serde_json::from_value(scores_doc)?;
            result = Recommendations::Found {
                links: links.links,
                scores: scores.scores,
            };
        }
    }

    Ok(result)
}

/// An empty object or empty array counts as "no links stored"
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
