use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::StudySubject;
use taskzen_infra::TaskZenContext;

pub async fn get_subjects(ctx: &TaskZenContext) -> Result<Vec<StudySubject>, TaskZenError> {
    execute(GetSubjectsUseCase {}, ctx)
        .await
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct GetSubjectsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetSubjectsUseCase {
    type Response = Vec<StudySubject>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .study
            .get_subjects()
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
