mod http;
mod inmemory;

pub(crate) use http::HttpProfileApi;
pub use inmemory::InMemoryProfileApi;

use taskzen_domain::{UserProfile, ID};

/// Caller-scoped profile and daily goal operations. "Caller" is the
/// identity the backend derives from the api key.
#[async_trait::async_trait]
pub trait IProfileApi: Send + Sync {
    async fn get_caller_user_profile(&self) -> anyhow::Result<Option<UserProfile>>;
    async fn save_caller_user_profile(&self, profile: &UserProfile) -> anyhow::Result<()>;
    async fn get_daily_goal(&self, user: &ID) -> anyhow::Result<Option<i64>>;
    /// Sets the daily goal of the caller
    async fn set_daily_goal(&self, goal: i64) -> anyhow::Result<()>;
}
