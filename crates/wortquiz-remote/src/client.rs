//! HTTP access to remote vocabulary sources.

use serde::Deserialize;
use tracing::instrument;

use crate::error::FetchError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches remote CSV sheets and the version watermark.
pub struct RemoteClient {
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct VersionDoc {
    version: u32,
}

impl Default for RemoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Fetches the published version watermark, a `{"version": N}`
    /// document.
    #[instrument(skip(self))]
    pub async fn fetch_version(&self, url: &str) -> Result<u32, FetchError> {
        let text = self.fetch_text(url).await?;
        let doc: VersionDoc = serde_json::from_str(&text)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
        Ok(doc.version)
    }

    /// Fetches one CSV sheet as text.
    #[instrument(skip(self))]
    pub async fn fetch_csv(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_text(url).await
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::HttpStatus { status });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
