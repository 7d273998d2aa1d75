use super::IStudyApi;
use crate::backend::shared::inmemory::*;
use crate::backend::task::{ITaskApi, InMemoryTaskApi};
use std::sync::{Arc, Mutex};
use taskzen_domain::{Assignment, StudySubject, ID};

/// Shares the task store with [`InMemoryTaskApi`] so that assignments
/// are backed by real tasks, like the remote backend does it.
pub struct InMemoryStudyApi {
    tasks: Arc<InMemoryTaskApi>,
    subjects: Mutex<Vec<StudySubject>>,
}

impl InMemoryStudyApi {
    pub fn new(tasks: Arc<InMemoryTaskApi>) -> Self {
        Self {
            tasks,
            subjects: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IStudyApi for InMemoryStudyApi {
    async fn get_subjects(&self) -> anyhow::Result<Vec<StudySubject>> {
        Ok(find_all(&self.subjects))
    }

    async fn create_subject(&self, title: &str) -> anyhow::Result<ID> {
        let subject = StudySubject::new(self.tasks.owner(), title);
        let id = subject.id.clone();
        insert(&subject, &self.subjects);
        Ok(id)
    }

    async fn get_assignments(&self, subject_id: &ID) -> anyhow::Result<Option<Vec<Assignment>>> {
        Ok(find(subject_id, &self.subjects).map(|subject| subject.assignments))
    }

    async fn add_assignment(
        &self,
        subject_id: &ID,
        title: &str,
        due_date: Option<i64>,
    ) -> anyhow::Result<Option<ID>> {
        if find(subject_id, &self.subjects).is_none() {
            return Ok(None);
        }
        let task_id = self.tasks.add_task(title).await?;
        let assignment = Assignment {
            id: ID::new(),
            title: title.to_string(),
            owner: self.tasks.owner(),
            due_date,
            task_id,
            subject_id: subject_id.clone(),
        };
        let assignment_id = assignment.id.clone();
        update(subject_id, &self.subjects, |subject| {
            subject.assignments.push(assignment.clone())
        });
        Ok(Some(assignment_id))
    }
}
