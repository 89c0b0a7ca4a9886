//! Datastore snapshot of every in-memory container.

use serde::{Deserialize, Serialize};

use super::{Form, Poll};

/// Current snapshot schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Read-out of all polls, forms and the view preference at one moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub schema_version: i32,
    pub generated_at: String,
    pub revision_id: u64,
    pub polls: Vec<Poll>,
    pub forms: Vec<Form>,
    pub is_compact_view: bool,
}
