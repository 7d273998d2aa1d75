use crate::kv::{FileKvStore, IKvStore, InMemoryKvStore};
use std::path::Path;
use std::sync::Arc;

/// The two key-value scopes of the app. `session` holds state that must
/// not outlive the current run (the fired-reminder ledger), `durable`
/// holds settings that survive restarts (focus mode).
#[derive(Clone)]
pub struct Stores {
    pub session: Arc<dyn IKvStore>,
    pub durable: Arc<dyn IKvStore>,
}

impl Stores {
    pub fn create_file(session_file: &Path, settings_file: &Path) -> Self {
        let session = FileKvStore::new(session_file);
        // Session boundary: a new run starts from an empty session store,
        // only restarts within the same run may observe previous state.
        session.clear();
        Self {
            session: Arc::new(session),
            durable: Arc::new(FileKvStore::new(settings_file)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            session: Arc::new(InMemoryKvStore::new()),
            durable: Arc::new(InMemoryKvStore::new()),
        }
    }
}
