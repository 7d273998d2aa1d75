use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::Task;
use taskzen_infra::TaskZenContext;

pub async fn get_all_tasks(ctx: &TaskZenContext) -> Result<Vec<Task>, TaskZenError> {
    execute(GetAllTasksUseCase {}, ctx)
        .await
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct GetAllTasksUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetAllTasksUseCase {
    type Response = Vec<Task>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .tasks
            .get_all_tasks()
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
