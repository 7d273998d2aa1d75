use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_infra::TaskZenContext;

pub async fn set_daily_goal(ctx: &TaskZenContext, goal: i64) -> Result<(), TaskZenError> {
    let usecase = SetDailyGoalUseCase { goal };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::InvalidGoal(goal) => TaskZenError::BadClientData(format!(
            "The daily goal: {} is not valid, it must be a positive integer",
            goal
        )),
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct SetDailyGoalUseCase {
    pub goal: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidGoal(i64),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for SetDailyGoalUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        if self.goal <= 0 {
            return Err(UseCaseErrors::InvalidGoal(self.goal));
        }

        ctx.backend
            .profiles
            .set_daily_goal(self.goal)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_non_positive_goal() {
        let ctx = taskzen_infra::setup_context_inmemory();
        assert!(matches!(
            set_daily_goal(&ctx, 0).await,
            Err(TaskZenError::BadClientData(_))
        ));
        assert!(matches!(
            set_daily_goal(&ctx, -3).await,
            Err(TaskZenError::BadClientData(_))
        ));
    }
}
