use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::ID;
use taskzen_infra::TaskZenContext;

pub async fn get_daily_goal(
    ctx: &TaskZenContext,
    user: ID,
) -> Result<Option<i64>, TaskZenError> {
    let usecase = GetDailyGoalUseCase { user };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct GetDailyGoalUseCase {
    pub user: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetDailyGoalUseCase {
    type Response = Option<i64>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .profiles
            .get_daily_goal(&self.user)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
