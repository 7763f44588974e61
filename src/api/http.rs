//! HTTP implementation of `ReportsApi` over reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{extract_detail, ApiError, ReportsApi};
use crate::config::ApiConfig;
use crate::models::{FormField, NewReport, Report, ReportStatus, StatusUpdate};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub struct HttpReportsApi {
    client: Client,
    config: ApiConfig,
}

impl HttpReportsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn status_url(&self, id: &str) -> String {
        let id = utf8_percent_encode(id, PATH_SEGMENT);
        self.config.endpoint(&format!("/reports/{}/status", id))
    }
}

fn build_form(report: &NewReport) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for field in report.form_fields() {
        form = match field {
            FormField::Text { name, value } => form.text(name, value.to_string()),
            FormField::File { name, screenshot } => {
                let part = Part::bytes(screenshot.bytes.clone())
                    .file_name(screenshot.file_name.clone())
                    .mime_str(&screenshot.content_type)
                    .map_err(|e| ApiError::Decode(format!("bad screenshot type: {}", e)))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Turn non-2xx responses into `ApiError::Service`, carrying the body's `detail`
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Service {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ReportsApi for HttpReportsApi {
    async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        let url = self.config.endpoint("/reports");
        tracing::debug!(%url, "GET reports");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(check(response).await?).await
    }

    async fn create_report(&self, report: &NewReport) -> Result<Report, ApiError> {
        let url = self.config.endpoint("/reports");
        let fields: Vec<&str> = report.form_fields().iter().map(FormField::name).collect();
        tracing::debug!(%url, ?fields, "POST report");
        let response = self
            .client
            .post(&url)
            .multipart(build_form(report)?)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(check(response).await?).await
    }

    async fn update_status(&self, id: &str, status: &ReportStatus) -> Result<Option<Report>, ApiError> {
        let url = self.status_url(id);
        tracing::debug!(%url, %status, "PUT report status");
        let response = self
            .client
            .put(&url)
            .json(&StatusUpdate { status })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = check(response)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        // Any 2xx counts; the echoed report is a bonus
        Ok(serde_json::from_str(&body).ok())
    }
}
