use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::ID;
use taskzen_infra::TaskZenContext;

pub async fn add_assignment(
    ctx: &TaskZenContext,
    subject_id: ID,
    title: &str,
    due_date: Option<i64>,
) -> Result<ID, TaskZenError> {
    let usecase = AddAssignmentUseCase {
        subject_id,
        title: title.to_string(),
        due_date,
    };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::EmptyTitle => {
            TaskZenError::BadClientData("Assignment title must not be empty".to_string())
        }
        UseCaseErrors::SubjectNotFound(subject_id) => TaskZenError::NotFound(format!(
            "The subject with id: {}, was not found.",
            subject_id
        )),
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct AddAssignmentUseCase {
    pub subject_id: ID,
    pub title: String,
    /// Optional due date in nanoseconds since the epoch
    pub due_date: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyTitle,
    SubjectNotFound(ID),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for AddAssignmentUseCase {
    type Response = ID;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        ctx.backend
            .study
            .add_assignment(&self.subject_id, title, self.due_date)
            .await
            .map_err(UseCaseErrors::StorageError)?
            .ok_or_else(|| UseCaseErrors::SubjectNotFound(self.subject_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::{create_subject, get_assignments};

    #[tokio::test]
    async fn adds_assignment_to_existing_subject() {
        let ctx = taskzen_infra::setup_context_inmemory();
        let subject_id = create_subject(&ctx, "History").await.unwrap();

        let assignment_id = add_assignment(&ctx, subject_id.clone(), "Essay draft", None)
            .await
            .unwrap();

        let assignments = get_assignments(&ctx, subject_id).await.unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].id, assignment_id);
    }

    #[tokio::test]
    async fn unknown_subject_is_not_found() {
        let ctx = taskzen_infra::setup_context_inmemory();
        assert!(matches!(
            add_assignment(&ctx, ID::new(), "Essay draft", None).await,
            Err(TaskZenError::NotFound(_))
        ));
    }
}
