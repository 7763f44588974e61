//! Frontend Models
//!
//! Data structures matching the Reports Service payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Report record (matches service response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub tester_name: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub screenshot_url: Option<String>,
}

/// Services differ on whether ids are strings or integers; both are held as opaque strings.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid report id: {}", other))),
    }
}

/// Lifecycle stage of a report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    /// A value the service returned that this panel does not know about
    Other(String),
}

/// Status options offered by the dropdown, in display order
pub const STATUS_OPTIONS: &[(ReportStatus, &str)] = &[
    (ReportStatus::Open, "Open"),
    (ReportStatus::InProgress, "In Progress"),
    (ReportStatus::Resolved, "Resolved"),
];

impl ReportStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "open" => ReportStatus::Open,
            "in_progress" => ReportStatus::InProgress,
            "resolved" => ReportStatus::Resolved,
            other => ReportStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ReportStatus {
    fn from(raw: String) -> Self {
        ReportStatus::parse(&raw)
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `PUT /reports/{id}/status`
#[derive(Debug, Serialize)]
pub struct StatusUpdate<'a> {
    pub status: &'a ReportStatus,
}

/// Image staged in the creation form
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Validated creation payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub description: String,
    pub tester_name: Option<String>,
    pub screenshot: Option<Screenshot>,
}

/// One field of the multipart creation body
#[derive(Debug, Clone, PartialEq)]
pub enum FormField<'a> {
    Text { name: &'static str, value: &'a str },
    File { name: &'static str, screenshot: &'a Screenshot },
}

impl FormField<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

impl NewReport {
    /// Multipart fields in send order; optional fields are omitted, never sent empty.
    pub fn form_fields(&self) -> Vec<FormField<'_>> {
        let mut fields = vec![FormField::Text { name: "description", value: &self.description }];
        if let Some(tester) = &self.tester_name {
            fields.push(FormField::Text { name: "tester_name", value: tester });
        }
        if let Some(screenshot) = &self.screenshot {
            fields.push(FormField::File { name: "file", screenshot });
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report_list() {
        let json = r#"[{"id":"1","description":"Button broken","status":"open","tester_name":"Jo","created_at":"2024-01-01T00:00:00Z","screenshot_url":null}]"#;
        let reports: Vec<Report> = serde_json::from_str(json).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "1");
        assert_eq!(reports[0].status, ReportStatus::Open);
        assert_eq!(reports[0].tester_name.as_deref(), Some("Jo"));
        assert!(reports[0].screenshot_url.is_none());
    }

    #[test]
    fn test_numeric_id_and_missing_optionals() {
        let json = r#"{"id":42,"description":"Crash","created_at":"2024-01-01T00:00:00"}"#;
        let report: Report = serde_json::from_str(json).unwrap();

        assert_eq!(report.id, "42");
        assert_eq!(report.status, ReportStatus::Open);
        assert!(report.tester_name.is_none());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let json = r#"{"id":"7","description":"x","status":"wont_fix","created_at":""}"#;
        let report: Report = serde_json::from_str(json).unwrap();

        assert_eq!(report.status, ReportStatus::Other("wont_fix".to_string()));
        assert_eq!(report.status.as_str(), "wont_fix");
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_string(&StatusUpdate { status: &ReportStatus::InProgress }).unwrap();
        assert_eq!(body, r#"{"status":"in_progress"}"#);
    }

    #[test]
    fn test_form_fields_description_only() {
        let new_report = NewReport {
            description: "Crash on save".to_string(),
            tester_name: None,
            screenshot: None,
        };

        let fields = new_report.form_fields();
        assert_eq!(fields, vec![FormField::Text { name: "description", value: "Crash on save" }]);
    }

    #[test]
    fn test_form_fields_all_parts() {
        let new_report = NewReport {
            description: "Crash".to_string(),
            tester_name: Some("Jo".to_string()),
            screenshot: Some(Screenshot {
                file_name: "shot.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            }),
        };

        let names: Vec<&str> = new_report.form_fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["description", "tester_name", "file"]);
    }
}
