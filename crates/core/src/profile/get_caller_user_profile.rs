use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::UserProfile;
use taskzen_infra::TaskZenContext;

/// `None` means the caller has not set up a profile yet.
pub async fn get_caller_user_profile(
    ctx: &TaskZenContext,
) -> Result<Option<UserProfile>, TaskZenError> {
    execute(GetCallerUserProfileUseCase {}, ctx)
        .await
        .map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct GetCallerUserProfileUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetCallerUserProfileUseCase {
    type Response = Option<UserProfile>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        ctx.backend
            .profiles
            .get_caller_user_profile()
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}
