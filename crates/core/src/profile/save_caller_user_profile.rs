use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::UserProfile;
use taskzen_infra::TaskZenContext;

pub async fn save_caller_user_profile(
    ctx: &TaskZenContext,
    profile: UserProfile,
) -> Result<(), TaskZenError> {
    let usecase = SaveCallerUserProfileUseCase { profile };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::EmptyName => {
            TaskZenError::BadClientData("Profile name must not be empty".to_string())
        }
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct SaveCallerUserProfileUseCase {
    pub profile: UserProfile,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyName,
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for SaveCallerUserProfileUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        if self.profile.name.trim().is_empty() {
            return Err(UseCaseErrors::EmptyName);
        }

        ctx.backend
            .profiles
            .save_caller_user_profile(&self.profile)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_caller_user_profile;

    #[tokio::test]
    async fn profile_roundtrip() {
        let ctx = taskzen_infra::setup_context_inmemory();
        assert_eq!(get_caller_user_profile(&ctx).await.unwrap(), None);

        let profile = UserProfile {
            name: "Ada".to_string(),
        };
        save_caller_user_profile(&ctx, profile.clone()).await.unwrap();
        assert_eq!(get_caller_user_profile(&ctx).await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let ctx = taskzen_infra::setup_context_inmemory();
        let profile = UserProfile {
            name: "  ".to_string(),
        };
        assert!(matches!(
            save_caller_user_profile(&ctx, profile).await,
            Err(TaskZenError::BadClientData(_))
        ));
    }
}
