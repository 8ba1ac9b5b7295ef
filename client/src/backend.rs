use std::time::Duration;

use async_trait::async_trait;
use config::WizardSettings;
use errors::ClientError;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, trace};
use wizard_core::Configuration;

use crate::Result;

/// Performs one outbound request carrying a configuration snapshot.
#[async_trait]
pub trait MetadataBackend: Send + Sync {
    /// POST `body` as JSON to `url` and return the parsed JSON response.
    async fn post_json(&self, url: &str, body: &Configuration) -> Result<Value>;
}

/// [`MetadataBackend`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpMetadataBackend {
    http: Client
}

impl HttpMetadataBackend {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn from_settings(settings: &WizardSettings) -> Result<Self> {
        Self::new(Duration::from_secs(settings.request_timeout_secs))
    }
}

#[async_trait]
impl MetadataBackend for HttpMetadataBackend {
    async fn post_json(&self, url: &str, body: &Configuration) -> Result<Value> {
        let target = Url::parse(url).map_err(|e| ClientError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string()
        })?;

        debug!("POST {}", target);
        let resp = self.http.post(target).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message
            });
        }

        let text = resp.text().await?;
        trace!("Backend responded with {} bytes", text.len());
        Ok(serde_json::from_str(&text)?)
    }
}
