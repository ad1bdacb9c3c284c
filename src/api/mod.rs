//! HTTP client for the employee API.

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::model::{EmployeeRecord, Payload};

/// Client for the employee endpoints under a fixed base URL.
///
/// Requests are plain GETs with no retries and no timeout; each failure is
/// terminal for that request. The blocking client keeps the UI loop free of
/// an async runtime; callers run requests on a worker thread.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder().timeout(None).build()?;
        Ok(Self { base_url, http })
    }

    /// Fetch the unfiltered employee list.
    pub fn fetch_list(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        self.get_json(&format!("{}/api/employees", self.base_url))
    }

    /// Look up employees by ID or search term. The server may answer with a
    /// single record, a sequence, or `null`.
    pub fn fetch_one(&self, query: &str) -> Result<Payload, ApiError> {
        let url = format!(
            "{}/api/employees/{}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get_json(&url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
