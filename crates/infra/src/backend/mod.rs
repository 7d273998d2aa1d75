mod profile;
mod shared;
mod study;
mod task;

pub use profile::{IProfileApi, InMemoryProfileApi};
pub use study::{IStudyApi, InMemoryStudyApi};
pub use task::{ITaskApi, InMemoryTaskApi};

use profile::HttpProfileApi;
use shared::rest::RestClient;
use std::sync::Arc;
use study::HttpStudyApi;
use task::HttpTaskApi;

/// Client handle to the external task/assignment/profile backend.
/// The backend owns all task data, this side only calls its operations
/// and reads snapshots.
#[derive(Clone)]
pub struct Backend {
    pub tasks: Arc<dyn ITaskApi>,
    pub study: Arc<dyn IStudyApi>,
    pub profiles: Arc<dyn IProfileApi>,
}

impl Backend {
    pub fn create_http(base_url: &str, api_key: Option<String>) -> Self {
        let client = RestClient::new(base_url, api_key);
        Self {
            tasks: Arc::new(HttpTaskApi::new(client.clone())),
            study: Arc::new(HttpStudyApi::new(client.clone())),
            profiles: Arc::new(HttpProfileApi::new(client)),
        }
    }

    pub fn create_inmemory() -> Self {
        let tasks = Arc::new(InMemoryTaskApi::new());
        Self {
            study: Arc::new(InMemoryStudyApi::new(tasks.clone())),
            tasks,
            profiles: Arc::new(InMemoryProfileApi::new()),
        }
    }
}
