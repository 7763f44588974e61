//! Reports Service Bindings
//!
//! `ReportsApi` is the seam between the view and the network; the browser
//! build uses `HttpReportsApi`, tests plug in an in-memory double.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewReport, Report, ReportStatus};

pub use http::HttpReportsApi;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed
    #[error("network error: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status
    #[error("service returned {status}")]
    Service { status: u16, detail: Option<String> },
    /// A 2xx body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user: the service's `detail` when it sent one, else `fallback`
    pub fn notice_text(&self, fallback: &str) -> String {
        match self {
            ApiError::Service { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull a human-readable `detail` out of an error body
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait(?Send)]
pub trait ReportsApi {
    /// `GET /reports`
    async fn list_reports(&self) -> Result<Vec<Report>, ApiError>;

    /// `POST /reports` (multipart)
    async fn create_report(&self, report: &NewReport) -> Result<Report, ApiError>;

    /// `PUT /reports/{id}/status`; the service may or may not echo the report back
    async fn update_status(&self, id: &str, status: &ReportStatus) -> Result<Option<Report>, ApiError>;
}
