use crate::config::AuditConfig;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Downloads page markup over HTTP
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &AuditConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the body of `url` as text. Any HTTP status of 400 or above is
    /// an error. Requests are never retried.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        ::log::debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;
        ::log::debug!("Response status for {}: {}", url, response.status());

        let body = response.error_for_status()?.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
