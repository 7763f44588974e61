//! Form Validation
//!
//! Runs before any network call; the creation flow only sends a `NewReport`.

use crate::models::{NewReport, Screenshot};
use crate::store::ReportForm;

pub const DESCRIPTION_REQUIRED: &str = "Please describe the problem";
pub const IMAGE_ONLY: &str = "You can only upload image files!";
pub const ONE_SCREENSHOT: &str = "Only one screenshot can be attached";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Screenshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Turn the raw form into a payload, or report every field that blocks submission
pub fn validate_report_form(form: &ReportForm) -> Result<NewReport, Vec<FieldError>> {
    let mut errors = Vec::new();

    let description = form.description.trim();
    if description.is_empty() {
        errors.push(FieldError {
            field: Field::Description,
            message: DESCRIPTION_REQUIRED.to_string(),
        });
    }
    if let Some(screenshot) = &form.screenshot {
        if !is_image(&screenshot.content_type) {
            errors.push(FieldError {
                field: Field::Screenshot,
                message: IMAGE_ONLY.to_string(),
            });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let tester_name = Some(form.tester_name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    Ok(NewReport {
        description: description.to_string(),
        tester_name,
        screenshot: form.screenshot.clone(),
    })
}

/// Why a selected file was not staged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotRejection {
    NotAnImage,
    SlotTaken,
}

impl ScreenshotRejection {
    pub fn message(self) -> &'static str {
        match self {
            ScreenshotRejection::NotAnImage => IMAGE_ONLY,
            ScreenshotRejection::SlotTaken => ONE_SCREENSHOT,
        }
    }
}

/// Decide whether a file of `content_type` may be staged next to `staged`.
///
/// The type is checked first so a non-image never counts against the single slot.
pub fn check_screenshot(staged: Option<&Screenshot>, content_type: &str) -> Result<(), ScreenshotRejection> {
    if !is_image(content_type) {
        return Err(ScreenshotRejection::NotAnImage);
    }
    if staged.is_some() {
        return Err(ScreenshotRejection::SlotTaken);
    }
    Ok(())
}

pub fn is_image(content_type: &str) -> bool {
    content_type.trim().to_ascii_lowercase().starts_with("image/")
}
