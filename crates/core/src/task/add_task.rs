use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::ID;
use taskzen_infra::TaskZenContext;

pub async fn add_task(ctx: &TaskZenContext, title: &str) -> Result<ID, TaskZenError> {
    let usecase = AddTaskUseCase {
        title: title.to_string(),
    };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::EmptyTitle => {
            TaskZenError::BadClientData("Task title must not be empty".to_string())
        }
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct AddTaskUseCase {
    pub title: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyTitle,
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for AddTaskUseCase {
    type Response = ID;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        ctx.backend
            .tasks
            .add_task(title)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskzen_infra::setup_context_inmemory;

    #[tokio::test]
    async fn rejects_empty_title() {
        let ctx = setup_context_inmemory();
        assert!(matches!(
            add_task(&ctx, "   ").await,
            Err(TaskZenError::BadClientData(_))
        ));
        assert!(ctx.backend.tasks.get_all_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn trims_and_stores_the_title() {
        let ctx = setup_context_inmemory();
        let id = add_task(&ctx, "  Water the plants ").await.unwrap();
        let tasks = ctx.backend.tasks.get_all_tasks().await.unwrap();
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "Water the plants");
    }
}
