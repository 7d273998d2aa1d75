use super::ITaskApi;
use crate::backend::shared::inmemory::*;
use anyhow::anyhow;
use std::sync::Mutex;
use taskzen_domain::{Task, ID};

pub struct InMemoryTaskApi {
    owner: ID,
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self {
            owner: ID::new(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// The identity the backend would infer from the api key
    pub fn owner(&self) -> ID {
        self.owner.clone()
    }
}

impl Default for InMemoryTaskApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ITaskApi for InMemoryTaskApi {
    async fn get_all_tasks(&self) -> anyhow::Result<Vec<Task>> {
        Ok(find_all(&self.tasks))
    }

    async fn add_task(&self, title: &str) -> anyhow::Result<ID> {
        let task = Task::new(self.owner.clone(), title);
        let id = task.id.clone();
        insert(&task, &self.tasks);
        Ok(id)
    }

    async fn complete_task(&self, task_id: &ID) -> anyhow::Result<()> {
        if update(task_id, &self.tasks, |task| task.completed = true) {
            Ok(())
        } else {
            Err(anyhow!("Task with id: {} was not found", task_id))
        }
    }

    async fn delete_task(&self, task_id: &ID) -> anyhow::Result<()> {
        delete(task_id, &self.tasks)
            .map(|_| ())
            .ok_or_else(|| anyhow!("Task with id: {} was not found", task_id))
    }

    async fn set_task_reminder(&self, task_id: &ID, reminder_time: i64) -> anyhow::Result<()> {
        if update(task_id, &self.tasks, |task| {
            task.reminder_time = Some(reminder_time)
        }) {
            Ok(())
        } else {
            Err(anyhow!("Task with id: {} was not found", task_id))
        }
    }

    async fn clear_task_reminder(&self, task_id: &ID) -> anyhow::Result<()> {
        if update(task_id, &self.tasks, |task| task.reminder_time = None) {
            Ok(())
        } else {
            Err(anyhow!("Task with id: {} was not found", task_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn task_lifecycle() {
        let api = InMemoryTaskApi::new();
        let id = api.add_task("Read chapter 4").await.unwrap();

        let tasks = api.get_all_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].owner, api.owner());

        api.set_task_reminder(&id, 1_000_000).await.unwrap();
        assert_eq!(
            api.get_all_tasks().await.unwrap()[0].reminder_time,
            Some(1_000_000)
        );

        api.clear_task_reminder(&id).await.unwrap();
        assert_eq!(api.get_all_tasks().await.unwrap()[0].reminder_time, None);

        api.complete_task(&id).await.unwrap();
        assert!(api.get_all_tasks().await.unwrap()[0].completed);

        api.delete_task(&id).await.unwrap();
        assert!(api.get_all_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_task_id_is_an_error() {
        let api = InMemoryTaskApi::new();
        assert!(api.complete_task(&ID::new()).await.is_err());
        assert!(api.delete_task(&ID::new()).await.is_err());
        assert!(api.set_task_reminder(&ID::new(), 0).await.is_err());
    }
}
