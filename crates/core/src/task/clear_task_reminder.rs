use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::ID;
use taskzen_infra::TaskZenContext;

pub async fn clear_task_reminder(ctx: &TaskZenContext, task_id: ID) -> Result<(), TaskZenError> {
    let usecase = ClearTaskReminderUseCase { task_id };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct ClearTaskReminderUseCase {
    pub task_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for ClearTaskReminderUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .tasks
            .clear_task_reminder(&self.task_id)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
