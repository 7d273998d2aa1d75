mod file;
mod inmemory;

pub use file::FileKvStore;
pub use inmemory::InMemoryKvStore;

/// Small string key-value store behind the session and durable state
/// of the app (fired-reminder ledger, focus mode setting). Synchronous
/// and infallible: a store that cannot read its backing data behaves
/// as empty instead of erroring.
pub trait IKvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}
