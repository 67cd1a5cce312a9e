use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Recommendation strategy, one per precomputed table
///
/// The external recommender produced two independent result sets: the
/// Universal Recommender ("ur") and ALS collaborative filtering ("als").
/// Both tables share the same shape; only the table name differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Ur,
    Als,
}

impl Strategy {
    /// Table holding this strategy's precomputed rows
    ///
    /// A closed enum keeps the table identifier out of attacker control,
    /// since it is interpolated into the query text rather than bound.
    pub fn table(self) -> &'static str {
        match self {
            Strategy::Ur => "ur_rec",
            Strategy::Als => "als_rec",
        }
    }
}

/// One row of a strategy table as stored
///
/// `links` and `scores` are independently JSON-encoded documents written by
/// the out-of-scope ingestion process; this crate only ever reads them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecRow {
    pub links: String,
    pub scores: String,
}

/// The `links` document's expected shape
#[derive(Debug, Deserialize)]
pub struct LinksPayload {
    pub links: Vec<String>,
}

/// The `scores` document's expected shape
#[derive(Debug, Deserialize)]
pub struct ScoresPayload {
    pub scores: Vec<f64>,
}

/// Normalized lookup result returned by the query endpoints
///
/// Three observably distinct outputs:
/// - `NoMatch` serializes to `{}` (no row for the identifier)
/// - `NoResult` serializes to `{"links":["no_result"],"scores":["no_score"]}`
///   (a row exists but carries no links)
/// - `Found` serializes the stored arrays order-preserved
///
/// `NoMatch` and `NoResult` are both part of the public contract and must
/// not be collapsed into each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    NoMatch,
    NoResult,
    Found { links: Vec<String>, scores: Vec<f64> },
}

impl Serialize for Recommendations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Recommendations::NoMatch => serializer.serialize_map(Some(0))?.end(),
            Recommendations::NoResult => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("links", &["no_result"])?;
                map.serialize_entry("scores", &["no_score"])?;
                map.end()
            }
            Recommendations::Found { links, scores } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("links", links)?;
                map.serialize_entry("scores", scores)?;
                map.end()
            }
        }
    }
}

/// One exported prediction, written as a single JSON line
///
/// `rec` is the recommender's `itemScores` value carried through verbatim;
/// its inner structure is opaque to this crate. Field order is part of the
/// output contract (`user_id` first).
#[derive(Debug, Clone, Serialize)]
pub struct PredictionLine {
    pub user_id: String,
    pub rec: Value,
}

/// One interaction event submitted to the event-ingestion API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event: String,
    pub entity_type: String,
    pub entity_id: String,
    pub target_entity_type: String,
    pub target_entity_id: String,
}

impl Event {
    /// Builds a user→item interaction event, the only kind this tool emits
    pub fn user_item(event: impl Into<String>, user: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            entity_type: "user".to_string(),
            entity_id: user.into(),
            target_entity_type: "item".to_string(),
            target_entity_id: item.into(),
        }
    }
}
