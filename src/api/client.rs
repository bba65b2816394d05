//! REST client for the HRMS Lite backend.

use async_trait::async_trait;
use tracing::warn;

use crate::api::error::ApiError;
use crate::api::HrApi;
use crate::model::{AttendanceRecord, Employee, NewAttendance, NewEmployee};

/// HTTP client against a fixed base URL. Holds no state beyond the reqwest
/// connection pool; every operation is exactly one request — no retry, no
/// caching, no timeout tuning.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HrApi for ApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = format!("{}/employees", self.base_url);
        let resp = self.http.get(&url).send().await.map_err(ApiError::transport)?;
        if !resp.status().is_success() {
            warn!(status = %resp.status(), "listing employees rejected");
            return Err(ApiError::Request("Failed to load employees".to_string()));
        }
        resp.json().await.map_err(ApiError::decode)
    }

    async fn create_employee(&self, input: &NewEmployee) -> Result<Employee, ApiError> {
        let url = format!("{}/employees", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(ApiError::transport)?;
        if !resp.status().is_success() {
            let status = resp.status();
            let message = detail_message(resp)
                .await
                .unwrap_or_else(|| "Failed to add employee".to_string());
            warn!(%status, detail = %message, "creating employee rejected");
            return Err(ApiError::Request(message));
        }
        resp.json().await.map_err(ApiError::decode)
    }

    async fn delete_employee(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/employees/{id}", self.base_url);
        let resp = self.http.delete(&url).send().await.map_err(ApiError::transport)?;
        if !resp.status().is_success() {
            warn!(status = %resp.status(), id, "deleting employee rejected");
            return Err(ApiError::Request("Failed to delete".to_string()));
        }
        Ok(())
    }

    async fn list_attendance(&self, employee_id: u64) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = format!("{}/employees/{employee_id}/attendance", self.base_url);
        let resp = self.http.get(&url).send().await.map_err(ApiError::transport)?;
        if !resp.status().is_success() {
            warn!(status = %resp.status(), employee_id, "listing attendance rejected");
            return Err(ApiError::Request("Failed to load attendance".to_string()));
        }
        resp.json().await.map_err(ApiError::decode)
    }

    async fn mark_attendance(
        &self,
        employee_id: u64,
        input: &NewAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = format!("{}/employees/{employee_id}/attendance", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(ApiError::transport)?;
        if !resp.status().is_success() {
            warn!(status = %resp.status(), employee_id, "marking attendance rejected");
            return Err(ApiError::Request("Failed to mark attendance".to_string()));
        }
        resp.json().await.map_err(ApiError::decode)
    }
}

/// Pull `detail` out of an error body when the server sent one. The body is
/// loosely typed: anything that is not JSON with a string `detail` yields
/// `None` and the caller falls back to its generic message.
async fn detail_message(resp: reqwest::Response) -> Option<String> {
    let body: serde_json::Value = resp.json().await.ok()?;
    body.get("detail")?.as_str().map(str::to_string)
}
