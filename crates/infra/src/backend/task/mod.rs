mod http;
mod inmemory;

pub(crate) use http::HttpTaskApi;
pub use inmemory::InMemoryTaskApi;

use taskzen_domain::{Task, ID};

#[async_trait::async_trait]
pub trait ITaskApi: Send + Sync {
    async fn get_all_tasks(&self) -> anyhow::Result<Vec<Task>>;
    async fn add_task(&self, title: &str) -> anyhow::Result<ID>;
    async fn complete_task(&self, task_id: &ID) -> anyhow::Result<()>;
    async fn delete_task(&self, task_id: &ID) -> anyhow::Result<()>;
    /// `reminder_time` is nanoseconds since the epoch
    async fn set_task_reminder(&self, task_id: &ID, reminder_time: i64) -> anyhow::Result<()>;
    async fn clear_task_reminder(&self, task_id: &ID) -> anyhow::Result<()>;
}
