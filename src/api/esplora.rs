use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::LedgerDataSource;
use crate::config::ApiConfig;
use crate::error::ApiClientError;
use crate::model::transaction::TransactionRecord;
use crate::model::transaction::TransactionSummary;

/// Client for the Esplora HTTP API (blockstream.info and compatible
/// deployments). No authentication, no retries; rate courtesy is the
/// tracer's concern.
#[derive(Debug, Clone)]
pub struct EsploraClient {
    client: reqwest::Client,
    base_url: String,
}

impl EsploraClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiClientError::BaseUrl(format!("{}: {}", base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<Option<T>, ApiClientError> {
        debug!("provider_request::url::{}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiClientError::Status { status: status.as_u16(), url });
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))?;

        Ok(Some(body))
    }
}

#[async_trait]
impl LedgerDataSource for EsploraClient {
    async fn address_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSummary>, ApiClientError> {
        let url = format!("{}/address/{}/txs", self.base_url, address);

        // An unknown address reads as an empty history
        Ok(self.get_json(url).await?.unwrap_or_default())
    }

    async fn transaction(
        &self,
        txid: &str,
    ) -> Result<Option<TransactionRecord>, ApiClientError> {
        let url = format!("{}/tx/{}", self.base_url, txid);
        self.get_json(url).await
    }
}
