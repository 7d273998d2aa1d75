use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::{Assignment, ID};
use taskzen_infra::TaskZenContext;

pub async fn get_assignments(
    ctx: &TaskZenContext,
    subject_id: ID,
) -> Result<Vec<Assignment>, TaskZenError> {
    let usecase = GetAssignmentsUseCase { subject_id };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::SubjectNotFound(subject_id) => TaskZenError::NotFound(format!(
            "The subject with id: {}, was not found.",
            subject_id
        )),
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct GetAssignmentsUseCase {
    pub subject_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    SubjectNotFound(ID),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetAssignmentsUseCase {
    type Response = Vec<Assignment>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .study
            .get_assignments(&self.subject_id)
            .await
            .map_err(UseCaseErrors::StorageError)?
            .ok_or_else(|| UseCaseErrors::SubjectNotFound(self.subject_id.clone()))
    }
}
