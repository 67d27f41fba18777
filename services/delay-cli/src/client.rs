use std::time::Duration;

use falcon_risk::{FlightRiskInput, RiskAssessment};
use reqwest::Client;
use serde::Deserialize;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// HTTP client for the delay risk endpoints.
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    config: ClientConfig,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub async fn predict(&self, input: &FlightRiskInput) -> Result<RiskAssessment, ClientError> {
        let resp = self
            .client
            .post(self.url("predict-delay"))
            .json(input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::HttpError { status, body });
        }

        Ok(resp.json::<RiskAssessment>().await?)
    }

    pub async fn health(&self) -> Result<ApiHealth, ClientError> {
        let resp = self.client.get(self.url("health")).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::HttpError { status, body });
        }

        Ok(resp.json::<ApiHealth>().await?)
    }
}
