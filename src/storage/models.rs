use serde::Serialize;
use uuid::Uuid;

use crate::transform::NormalizedRecord;

/// A normalized record after it was written, with its store identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedDocument {
    /// Identifier assigned at insert time
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// The stored record
    #[serde(flatten)]
    pub record: NormalizedRecord,
}
