pub mod codeforces;
pub mod uva;

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::models::config::UserConfig;
use crate::models::Source;

/// Raw, untransformed responses from both upstreams.
#[derive(Debug, Clone)]
pub struct RawPayloads {
    pub codeforces: Value,
    pub uva: Value,
}

pub struct Upstreams {
    client: Client,
    codeforces_url: String,
    uva_url: String,
}

impl Upstreams {
    pub fn from_config(config: &UserConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("cplist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            codeforces_url: config.codeforces_url.clone(),
            uva_url: config.uva_url.clone(),
        })
    }

    /// Issues both requests at once and waits for both. The first failure wins.
    pub async fn fetch_all(&self) -> Result<RawPayloads, AppError> {
        let (codeforces, uva) = tokio::try_join!(
            self.fetch_json(Source::Codeforces, &self.codeforces_url),
            self.fetch_json(Source::Uva, &self.uva_url),
        )?;
        Ok(RawPayloads { codeforces, uva })
    }

    async fn fetch_json(&self, upstream: Source, url: &str) -> Result<Value, AppError> {
        info!("Fetching {} problems from {}", upstream.as_str(), url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::network(upstream, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::network(upstream, format!("HTTP {}", status)));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| AppError::network(upstream, format!("unreadable body: {}", e)))?;

        info!("Received {} response", upstream.as_str());
        Ok(body)
    }
}
