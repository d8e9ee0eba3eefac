use crate::core::{ConfigProvider, FragmentSource};
use crate::utils::error::{Result, UiError};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches partials from `{base_url}/partial/{endpoint}`.
#[derive(Debug, Clone)]
pub struct HttpFragmentSource {
    client: Client,
    base_url: String,
}

impl HttpFragmentSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url())
    }

    // The endpoint is not validated or encoded; the server rejects bad names.
    pub fn partial_url(&self, endpoint: &str) -> String {
        format!("{}/partial/{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, endpoint: &str) -> Result<String> {
        let url = self.partial_url(endpoint);
        tracing::debug!("Making partial request to: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UiError::fetch_failed(endpoint, None, e.to_string()))?;

        let status = response.status();
        tracing::debug!("Partial response status: {}", status);

        if !status.is_success() {
            return Err(UiError::fetch_failed(
                endpoint,
                Some(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| UiError::fetch_failed(endpoint, None, e.to_string()))
    }
}
