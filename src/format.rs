//! Display Helpers
//!
//! Pure rendering rules for table cells, kept out of the components so they can be tested natively.

#[cfg(not(target_arch = "wasm32"))]
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::models::ReportStatus;

/// Tag color for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Blue,
    Orange,
    Green,
    /// Neutral grey for statuses this panel does not recognize
    Default,
}

impl TagColor {
    pub fn css_class(self) -> &'static str {
        match self {
            TagColor::Blue => "tag tag-blue",
            TagColor::Orange => "tag tag-orange",
            TagColor::Green => "tag tag-green",
            TagColor::Default => "tag tag-default",
        }
    }
}

pub fn status_color(status: &ReportStatus) -> TagColor {
    match status {
        ReportStatus::Open => TagColor::Blue,
        ReportStatus::InProgress => TagColor::Orange,
        ReportStatus::Resolved => TagColor::Green,
        ReportStatus::Other(_) => TagColor::Default,
    }
}

/// `in_progress` -> `IN PROGRESS`
pub fn status_label(status: &ReportStatus) -> String {
    status.as_str().replace('_', " ").to_uppercase()
}

/// Render `created_at` the way the viewer's browser renders dates: local
/// time zone, locale-specific layout. Values the browser cannot parse are
/// shown verbatim.
#[cfg(target_arch = "wasm32")]
pub fn format_created_at(raw: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Native rendering with a fixed layout, used off the browser.
///
/// Offset timestamps are converted to the local zone; timestamps without an
/// offset are taken as already local. Anything else is shown verbatim.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_created_at(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DATE_FORMAT).to_string();
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match naive.ok().and_then(|n| Local.from_local_datetime(&n).earliest()) {
        Some(local) => local.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

pub const VIEW_IMAGE: &str = "View Image";
pub const NO_SCREENSHOT: &str = "None";

/// Link target for the screenshot cell; blank URLs count as no screenshot
pub fn screenshot_link(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_tags() {
        assert_eq!(status_label(&ReportStatus::Open), "OPEN");
        assert_eq!(status_color(&ReportStatus::Open), TagColor::Blue);
        assert_eq!(status_label(&ReportStatus::InProgress), "IN PROGRESS");
        assert_eq!(status_color(&ReportStatus::InProgress), TagColor::Orange);
        assert_eq!(status_label(&ReportStatus::Resolved), "RESOLVED");
        assert_eq!(status_color(&ReportStatus::Resolved), TagColor::Green);
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let status = ReportStatus::Other("needs_more_info".to_string());
        assert_eq!(status_label(&status), "NEEDS MORE INFO");
        assert_eq!(status_color(&status).css_class(), "tag tag-default");

        let empty = ReportStatus::Other(String::new());
        assert_eq!(status_label(&empty), "");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_naive_timestamp_is_local() {
        assert_eq!(format_created_at("2024-01-01T00:00:00"), "2024-01-01 00:00:00");
        assert_eq!(format_created_at("2024-03-05T14:30:15.123456"), "2024-03-05 14:30:15");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_offset_timestamp_is_converted() {
        let rendered = format_created_at("2024-01-01T00:00:00Z");
        let expected = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .format(DATE_FORMAT)
            .to_string();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_unparsable_date_verbatim() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
        assert_eq!(format_created_at(""), "");
    }

    #[test]
    fn test_screenshot_link() {
        assert_eq!(screenshot_link(None), None);
        assert_eq!(screenshot_link(Some("  ")), None);
        assert_eq!(screenshot_link(Some("https://cdn/x.png")), Some("https://cdn/x.png"));
    }
}
