//! Backend API client
//!
//! Typed access to the four read-only dashboard endpoints:
//! - `/api/alerts`
//! - `/api/opportunities`
//! - `/api/finance/summary`
//! - `/api/clients`
//!
//! All requests are GET, all responses JSON. Decode failures are reported
//! separately from transport failures and non-2xx responses.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{Alert, ClientSummary, FinanceSummary, Opportunity};

const ALERTS_PATH: &str = "/api/alerts";
const OPPORTUNITIES_PATH: &str = "/api/opportunities";
const FINANCE_SUMMARY_PATH: &str = "/api/finance/summary";
const CLIENTS_PATH: &str = "/api/clients";

/// The four fetch operations a refresh cycle runs
///
/// The poller is written against this trait so tests can drive cycles with
/// a stub instead of a live backend.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn alerts(&self) -> Result<Vec<Alert>>;
    async fn opportunities(&self) -> Result<Vec<Opportunity>>;
    async fn finance_summary(&self) -> Result<FinanceSummary>;
    async fn client_summary(&self) -> Result<ClientSummary>;
}

/// HTTP client for the dashboard backend
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
    client: reqwest::Client,
}

impl DashboardClient {
    /// Create a client with the configured base URL and request timeout
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform a GET request and decode the JSON response
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.endpoint_url(path))
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle an API response, separating status, transport and decode errors
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".into());
            return Err(DashboardError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(DashboardError::from)
    }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn alerts(&self) -> Result<Vec<Alert>> {
        self.get(ALERTS_PATH).await
    }

    async fn opportunities(&self) -> Result<Vec<Opportunity>> {
        self.get(OPPORTUNITIES_PATH).await
    }

    async fn finance_summary(&self) -> Result<FinanceSummary> {
        self.get(FINANCE_SUMMARY_PATH).await
    }

    async fn client_summary(&self) -> Result<ClientSummary> {
        self.get(CLIENTS_PATH).await
    }
}
