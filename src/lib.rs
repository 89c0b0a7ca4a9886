//! Polls and Forms state core
//!
//! In-memory stores for creating and voting on polls, creating and submitting
//! forms, and a compact view toggle. There is no persistence: state lives as
//! long as the [`AppState`] that owns it.

pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod telemetry;
pub mod validation;

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

pub use config::Config;
pub use errors::AppError;
pub use models::*;
pub use store::{FormStore, IdGenerator, PollStore, SequentialIds, UuidGenerator, ViewPreference};

/// Application state shared across all consumers.
///
/// Each container sits behind its own lock, so every store operation runs
/// under a single lock boundary. Clones share the same stores.
#[derive(Clone, Debug)]
pub struct AppState {
    pub polls: Arc<RwLock<PollStore>>,
    pub forms: Arc<RwLock<FormStore>>,
    pub view: Arc<RwLock<ViewPreference>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    /// Build empty stores wired according to `config`.
    pub fn new(config: &Config) -> Self {
        let ids: Arc<dyn IdGenerator> = match &config.id_prefix {
            Some(prefix) => Arc::new(SequentialIds::new(prefix.clone())),
            None => Arc::new(UuidGenerator),
        };

        Self::with_id_generator(ids, config.compact_view)
    }

    /// Build empty stores that share one identifier source.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>, compact_view: bool) -> Self {
        Self {
            polls: Arc::new(RwLock::new(PollStore::with_id_generator(ids.clone()))),
            forms: Arc::new(RwLock::new(FormStore::with_id_generator(ids))),
            view: Arc::new(RwLock::new(ViewPreference::new(compact_view))),
        }
    }

    /// Combined revision of the poll and form stores.
    pub fn revision_id(&self) -> u64 {
        self.polls.read().revision() + self.forms.read().revision()
    }

    /// Copy of every container at this moment.
    pub fn snapshot(&self) -> Datastore {
        let polls = self.polls.read();
        let forms = self.forms.read();
        let is_compact_view = self.view.read().is_compact_view();

        Datastore {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            revision_id: polls.revision() + forms.revision(),
            polls: polls.get_all_polls().to_vec(),
            forms: forms.get_all_forms().to_vec(),
            is_compact_view,
        }
    }

    /// The snapshot as a JSON document.
    pub fn snapshot_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests;
