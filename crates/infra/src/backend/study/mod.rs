mod http;
mod inmemory;

pub(crate) use http::HttpStudyApi;
pub use inmemory::InMemoryStudyApi;

use taskzen_domain::{Assignment, StudySubject, ID};

/// Study zone operations. Assignments are backed by tasks, so
/// completing or deleting one goes through [`super::ITaskApi`] with the
/// assignment's `task_id`.
#[async_trait::async_trait]
pub trait IStudyApi: Send + Sync {
    async fn get_subjects(&self) -> anyhow::Result<Vec<StudySubject>>;
    async fn create_subject(&self, title: &str) -> anyhow::Result<ID>;
    /// `None` when the subject does not exist
    async fn get_assignments(&self, subject_id: &ID) -> anyhow::Result<Option<Vec<Assignment>>>;
    /// `None` when the subject does not exist
    async fn add_assignment(
        &self,
        subject_id: &ID,
        title: &str,
        due_date: Option<i64>,
    ) -> anyhow::Result<Option<ID>>;
}
