use super::IStudyApi;
use crate::backend::shared::rest::RestClient;
use serde::{Deserialize, Serialize};
use taskzen_domain::{Assignment, StudySubject, ID};

pub(crate) struct HttpStudyApi {
    client: RestClient,
}

impl HttpStudyApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSubjectRequest<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddAssignmentRequest<'a> {
    title: &'a str,
    due_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdResponse {
    id: ID,
}

#[async_trait::async_trait]
impl IStudyApi for HttpStudyApi {
    async fn get_subjects(&self) -> anyhow::Result<Vec<StudySubject>> {
        self.client.get("subjects").await
    }

    async fn create_subject(&self, title: &str) -> anyhow::Result<ID> {
        let res: IdResponse = self
            .client
            .post("subjects", &CreateSubjectRequest { title })
            .await?;
        Ok(res.id)
    }

    async fn get_assignments(&self, subject_id: &ID) -> anyhow::Result<Option<Vec<Assignment>>> {
        self.client
            .get_optional(&format!("subjects/{}/assignments", subject_id))
            .await
    }

    async fn add_assignment(
        &self,
        subject_id: &ID,
        title: &str,
        due_date: Option<i64>,
    ) -> anyhow::Result<Option<ID>> {
        let res: Option<IdResponse> = self
            .client
            .post_optional(
                &format!("subjects/{}/assignments", subject_id),
                &AddAssignmentRequest { title, due_date },
            )
            .await?;
        Ok(res.map(|r| r.id))
    }
}
