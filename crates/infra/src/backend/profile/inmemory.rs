use super::IProfileApi;
use std::collections::HashMap;
use std::sync::Mutex;
use taskzen_domain::{UserProfile, ID};

pub struct InMemoryProfileApi {
    caller: ID,
    profile: Mutex<Option<UserProfile>>,
    goals: Mutex<HashMap<ID, i64>>,
}

impl InMemoryProfileApi {
    pub fn new() -> Self {
        Self {
            caller: ID::new(),
            profile: Mutex::new(None),
            goals: Mutex::new(HashMap::new()),
        }
    }

    pub fn caller(&self) -> ID {
        self.caller.clone()
    }
}

impl Default for InMemoryProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IProfileApi for InMemoryProfileApi {
    async fn get_caller_user_profile(&self) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        *self.profile.lock().unwrap() = Some(profile.clone());
        Ok(())
    }

    async fn get_daily_goal(&self, user: &ID) -> anyhow::Result<Option<i64>> {
        Ok(self.goals.lock().unwrap().get(user).copied())
    }

    async fn set_daily_goal(&self, goal: i64) -> anyhow::Result<()> {
        self.goals.lock().unwrap().insert(self.caller.clone(), goal);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn profile_roundtrip() {
        let api = InMemoryProfileApi::new();
        assert!(api.get_caller_user_profile().await.unwrap().is_none());

        let profile = UserProfile {
            name: "Ada".to_string(),
        };
        api.save_caller_user_profile(&profile).await.unwrap();
        assert_eq!(api.get_caller_user_profile().await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn daily_goal_is_scoped_to_the_caller() {
        let api = InMemoryProfileApi::new();
        assert_eq!(api.get_daily_goal(&api.caller()).await.unwrap(), None);

        api.set_daily_goal(5).await.unwrap();
        assert_eq!(api.get_daily_goal(&api.caller()).await.unwrap(), Some(5));
        assert_eq!(api.get_daily_goal(&ID::new()).await.unwrap(), None);
    }
}
