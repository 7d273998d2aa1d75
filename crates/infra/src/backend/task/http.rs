use super::ITaskApi;
use crate::backend::shared::rest::RestClient;
use serde::{Deserialize, Serialize};
use taskzen_domain::{Task, ID};

pub(crate) struct HttpTaskApi {
    client: RestClient,
}

impl HttpTaskApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskRequest<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetReminderRequest {
    reminder_time: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdResponse {
    id: ID,
}

#[async_trait::async_trait]
impl ITaskApi for HttpTaskApi {
    async fn get_all_tasks(&self) -> anyhow::Result<Vec<Task>> {
        self.client.get("tasks").await
    }

    async fn add_task(&self, title: &str) -> anyhow::Result<ID> {
        let res: IdResponse = self.client.post("tasks", &AddTaskRequest { title }).await?;
        Ok(res.id)
    }

    async fn complete_task(&self, task_id: &ID) -> anyhow::Result<()> {
        self.client
            .post_unit(&format!("tasks/{}/complete", task_id), &())
            .await
    }

    async fn delete_task(&self, task_id: &ID) -> anyhow::Result<()> {
        self.client.delete_unit(&format!("tasks/{}", task_id)).await
    }

    async fn set_task_reminder(&self, task_id: &ID, reminder_time: i64) -> anyhow::Result<()> {
        self.client
            .put_unit(
                &format!("tasks/{}/reminder", task_id),
                &SetReminderRequest { reminder_time },
            )
            .await
    }

    async fn clear_task_reminder(&self, task_id: &ID) -> anyhow::Result<()> {
        self.client
            .delete_unit(&format!("tasks/{}/reminder", task_id))
            .await
    }
}
