use anyhow::Context;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Thin JSON client over the backend's REST surface. Transient failures
/// surface as errors for the caller to report, there is no automatic
/// retry.
#[derive(Clone)]
pub(crate) struct RestClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => req.header("taskzen-api-key", key),
            None => req,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let res = self
            .authed(self.client.get(&self.url(path)))
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at GET {}", path))?
            .error_for_status()
            .with_context(|| format!("Backend rejected GET {}", path))?;
        res.json().await.context("Malformed backend response")
    }

    /// GET where the backend answers 404 for a missing resource
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Option<T>> {
        let res = self
            .authed(self.client.get(&self.url(path)))
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at GET {}", path))?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let res = res
            .error_for_status()
            .with_context(|| format!("Backend rejected GET {}", path))?;
        res.json().await.map(Some).context("Malformed backend response")
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let res = self
            .authed(self.client.post(&self.url(path)))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at POST {}", path))?
            .error_for_status()
            .with_context(|| format!("Backend rejected POST {}", path))?;
        res.json().await.context("Malformed backend response")
    }

    /// POST where the backend answers 404 for a missing parent resource
    pub async fn post_optional<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<Option<T>> {
        let res = self
            .authed(self.client.post(&self.url(path)))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at POST {}", path))?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let res = res
            .error_for_status()
            .with_context(|| format!("Backend rejected POST {}", path))?;
        res.json().await.map(Some).context("Malformed backend response")
    }

    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        self.authed(self.client.post(&self.url(path)))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at POST {}", path))?
            .error_for_status()
            .with_context(|| format!("Backend rejected POST {}", path))?;
        Ok(())
    }

    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        self.authed(self.client.put(&self.url(path)))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at PUT {}", path))?
            .error_for_status()
            .with_context(|| format!("Backend rejected PUT {}", path))?;
        Ok(())
    }

    pub async fn delete_unit(&self, path: &str) -> anyhow::Result<()> {
        self.authed(self.client.delete(&self.url(path)))
            .send()
            .await
            .with_context(|| format!("Unable to reach backend at DELETE {}", path))?
            .error_for_status()
            .with_context(|| format!("Backend rejected DELETE {}", path))?;
        Ok(())
    }
}
