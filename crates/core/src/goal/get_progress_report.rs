use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::{GoalProgress, ID};
use taskzen_infra::TaskZenContext;

/// Derives the dashboard percentages from the current task snapshot
/// and the user's stored daily goal. Pure derivation, recomputed on
/// every call.
pub async fn get_progress_report(
    ctx: &TaskZenContext,
    user: ID,
) -> Result<GoalProgress, TaskZenError> {
    let usecase = GetProgressReportUseCase { user };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct GetProgressReportUseCase {
    pub user: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetProgressReportUseCase {
    type Response = GoalProgress;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        let tasks = ctx
            .backend
            .tasks
            .get_all_tasks()
            .await
            .map_err(UseCaseErrors::StorageError)?;
        let daily_goal = ctx
            .backend
            .profiles
            .get_daily_goal(&self.user)
            .await
            .map_err(UseCaseErrors::StorageError)?;

        Ok(GoalProgress::from_tasks(&tasks, daily_goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::set_daily_goal;
    use std::sync::Arc;
    use taskzen_infra::{setup_context_inmemory, InMemoryProfileApi};

    #[tokio::test]
    async fn derives_percentages_from_snapshot_and_goal() {
        let profiles = Arc::new(InMemoryProfileApi::new());
        let mut ctx = setup_context_inmemory();
        ctx.backend.profiles = profiles.clone();

        for i in 0..4 {
            let id = ctx
                .backend
                .tasks
                .add_task(&format!("task {}", i))
                .await
                .unwrap();
            if i < 3 {
                ctx.backend.tasks.complete_task(&id).await.unwrap();
            }
        }
        set_daily_goal(&ctx, 2).await.unwrap();

        let report = get_progress_report(&ctx, profiles.caller()).await.unwrap();
        assert_eq!(report.completed, 3);
        assert_eq!(report.total, 4);
        assert_eq!(report.completion_percentage, 75);
        assert_eq!(report.goal_percentage, 150);
    }

    #[tokio::test]
    async fn missing_goal_reports_zero_goal_percentage() {
        let profiles = Arc::new(InMemoryProfileApi::new());
        let mut ctx = setup_context_inmemory();
        ctx.backend.profiles = profiles.clone();

        let report = get_progress_report(&ctx, profiles.caller()).await.unwrap();
        assert_eq!(report.completion_percentage, 0);
        assert_eq!(report.goal_percentage, 0);
        assert_eq!(report.daily_goal, None);
    }
}
