use super::IProfileApi;
use crate::backend::shared::rest::RestClient;
use serde::{Deserialize, Serialize};
use taskzen_domain::{UserProfile, ID};

pub(crate) struct HttpProfileApi {
    client: RestClient,
}

impl HttpProfileApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyGoalResponse {
    goal: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetDailyGoalRequest {
    goal: i64,
}

#[async_trait::async_trait]
impl IProfileApi for HttpProfileApi {
    async fn get_caller_user_profile(&self) -> anyhow::Result<Option<UserProfile>> {
        self.client.get_optional("profile").await
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        self.client.put_unit("profile", profile).await
    }

    async fn get_daily_goal(&self, user: &ID) -> anyhow::Result<Option<i64>> {
        let res: DailyGoalResponse = self
            .client
            .get(&format!("users/{}/daily-goal", user))
            .await?;
        Ok(res.goal)
    }

    async fn set_daily_goal(&self, goal: i64) -> anyhow::Result<()> {
        self.client
            .put_unit("profile/daily-goal", &SetDailyGoalRequest { goal })
            .await
    }
}
