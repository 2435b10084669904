//! HTTP access to the finance API.
//!
//! Every category follows the same contract: `GET {base}{path}` returns a JSON
//! array of records, `POST {base}{path}` with a JSON object creates one.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{FinexusError, FinexusResult};
use crate::record::{parse_records, CategoryRecord};

/// Result of the connectivity probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub url: String,
    pub status: u16,
    /// Response body, when it was JSON
    pub body: Option<Value>,
}

impl ServiceStatus {
    pub fn is_healthy(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Operations a resource section needs from the API.
#[allow(async_fn_in_trait)]
pub trait RecordApi {
    /// Fetch the full collection at `path`.
    async fn list(&self, path: &str) -> FinexusResult<Vec<CategoryRecord>>;

    /// Create one record at `path`. The response body is not consumed.
    async fn create(&self, path: &str, payload: &Map<String, Value>) -> FinexusResult<()>;

    /// Probe the API root.
    async fn status(&self) -> FinexusResult<ServiceStatus>;
}

/// `reqwest`-backed [`RecordApi`]. Cheap to clone; clones share one client.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> FinexusResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FinexusError::Config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(base_url = %config.base_url(), timeout = ?config.timeout(), "HttpApi initialized");
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> FinexusError {
    if err.is_timeout() {
        FinexusError::Timeout(url.to_string())
    } else {
        FinexusError::Network(format!("{}: {}", url, err))
    }
}

impl RecordApi for HttpApi {
    async fn list(&self, path: &str) -> FinexusResult<Vec<CategoryRecord>> {
        let url = self.config.endpoint(path);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "List request failed");
            return Err(FinexusError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let records = parse_records(&body)
            .map_err(|e| FinexusError::Malformed(format!("{}: {}", url, e)))?;

        debug!(url = %url, count = records.len(), "Loaded records");
        Ok(records)
    }

    async fn create(&self, path: &str, payload: &Map<String, Value>) -> FinexusResult<()> {
        let url = self.config.endpoint(path);
        debug!(url = %url, fields = payload.len(), "POST");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Create request failed");
            return Err(FinexusError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn status(&self) -> FinexusResult<ServiceStatus> {
        let url = self.config.endpoint("/");
        debug!(url = %url, "Probing API");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok());

        Ok(ServiceStatus { url, status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_health() {
        let ok = ServiceStatus {
            url: "http://localhost:8000/".into(),
            status: 204,
            body: None,
        };
        assert!(ok.is_healthy());

        let down = ServiceStatus { status: 503, ..ok };
        assert!(!down.is_healthy());
    }

    #[test]
    fn http_api_keeps_config() {
        let api = HttpApi::new(ApiConfig::new("http://127.0.0.1:9/").unwrap()).unwrap();
        assert_eq!(api.config().base_url(), "http://127.0.0.1:9");
    }
}
