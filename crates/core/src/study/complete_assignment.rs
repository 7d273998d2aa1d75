use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::ID;
use taskzen_infra::TaskZenContext;

/// Assignments are linked to tasks, so this completes the underlying
/// task identified by the assignment's `task_id`.
pub async fn complete_assignment(ctx: &TaskZenContext, task_id: ID) -> Result<(), TaskZenError> {
    let usecase = CompleteAssignmentUseCase { task_id };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct CompleteAssignmentUseCase {
    pub task_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for CompleteAssignmentUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .tasks
            .complete_task(&self.task_id)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::{add_assignment, create_subject, get_assignments};

    #[tokio::test]
    async fn completes_the_underlying_task() {
        let ctx = taskzen_infra::setup_context_inmemory();
        let subject_id = create_subject(&ctx, "Physics").await.unwrap();
        add_assignment(&ctx, subject_id.clone(), "Lab report", None)
            .await
            .unwrap();

        let assignments = get_assignments(&ctx, subject_id).await.unwrap();
        complete_assignment(&ctx, assignments[0].task_id.clone())
            .await
            .unwrap();

        let tasks = ctx.backend.tasks.get_all_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].completed);
    }
}
