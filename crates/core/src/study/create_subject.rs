use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::ID;
use taskzen_infra::TaskZenContext;

pub async fn create_subject(ctx: &TaskZenContext, title: &str) -> Result<ID, TaskZenError> {
    let usecase = CreateSubjectUseCase {
        title: title.to_string(),
    };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::EmptyTitle => {
            TaskZenError::BadClientData("Subject title must not be empty".to_string())
        }
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct CreateSubjectUseCase {
    pub title: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyTitle,
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for CreateSubjectUseCase {
    type Response = ID;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        ctx.backend
            .study
            .create_subject(title)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
