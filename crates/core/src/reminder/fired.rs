use std::collections::HashSet;
use std::sync::Arc;
use taskzen_infra::IKvStore;

const FIRED_REMINDERS_KEY: &str = "taskzen-fired-reminders";

/// Session-scoped ledger of reminders that have already been fired,
/// keyed by the `"{task_id}-{reminder_time_nanos}"` composite key. The
/// backing store is session storage, so clearing the session resets the
/// ledger and reminders may fire again.
pub struct FiredReminders {
    store: Arc<dyn IKvStore>,
}

impl FiredReminders {
    pub fn new(store: Arc<dyn IKvStore>) -> Self {
        Self { store }
    }

    /// A corrupt stored value reads as an empty ledger, never an error.
    fn load(&self) -> HashSet<String> {
        self.store
            .get(FIRED_REMINDERS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn is_fired(&self, reminder_key: &str) -> bool {
        self.load().contains(reminder_key)
    }

    pub fn mark_fired(&self, reminder_key: &str) {
        let mut fired = self.load();
        fired.insert(reminder_key.to_string());
        match serde_json::to_string(&fired) {
            Ok(raw) => self.store.set(FIRED_REMINDERS_KEY, &raw),
            Err(e) => tracing::warn!("Unable to serialize fired-reminder ledger: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskzen_infra::InMemoryKvStore;

    fn ledger() -> (Arc<InMemoryKvStore>, FiredReminders) {
        let store = Arc::new(InMemoryKvStore::new());
        let ledger = FiredReminders::new(store.clone());
        (store, ledger)
    }

    #[test]
    fn marks_and_recalls_fired_reminders() {
        let (_, ledger) = ledger();
        assert!(!ledger.is_fired("a-1"));

        ledger.mark_fired("a-1");
        assert!(ledger.is_fired("a-1"));
        assert!(!ledger.is_fired("a-2"));

        ledger.mark_fired("a-2");
        assert!(ledger.is_fired("a-1"));
        assert!(ledger.is_fired("a-2"));
    }

    #[test]
    fn corrupt_stored_state_reads_as_empty() {
        let (store, ledger) = ledger();
        store.set(FIRED_REMINDERS_KEY, "{ not json !");
        assert!(!ledger.is_fired("a-1"));

        // Marking recovers the ledger
        ledger.mark_fired("a-1");
        assert!(ledger.is_fired("a-1"));
    }

    #[test]
    fn clearing_the_store_resets_the_ledger() {
        let (store, ledger) = ledger();
        ledger.mark_fired("a-1");
        store.clear();
        assert!(!ledger.is_fired("a-1"));
    }
}
