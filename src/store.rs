//! Admin View State Store
//!
//! The whole view state lives in one `AdminState`. Every change is an `Action`
//! applied by `reduce`, which never mutates its input; the Leptos store only
//! ever receives the next state wholesale.

use std::ops::Range;

use reactive_stores::Store;

use crate::config::PAGE_SIZE;
use crate::models::{Report, ReportStatus, Screenshot};
use crate::validation::{check_screenshot, Field, FieldError, ScreenshotRejection};

pub const STATUS_UPDATED: &str = "Status updated";
pub const REPORT_CREATED: &str = "Report created successfully";
pub const SCREENSHOT_READ_FAILED: &str = "Could not read the selected file";

/// In-progress values of the creation form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub description: String,
    pub tester_name: String,
    pub screenshot: Option<Screenshot>,
    /// A picked file is still being read; submitting waits for it
    pub reading: bool,
    pub field_errors: Vec<FieldError>,
}

impl ReportForm {
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient, non-blocking notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Everything the admin view renders
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AdminState {
    /// Reports in server order
    pub reports: Vec<Report>,
    /// List fetch in flight
    pub loading: bool,
    /// Creation request in flight
    pub submit_loading: bool,
    pub modal_open: bool,
    pub form: ReportForm,
    pub notices: Vec<Notice>,
    /// Zero-based table page
    pub page: usize,
    /// Id the next notice will get
    pub next_notice_id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    FetchStarted,
    FetchSucceeded(Vec<Report>),
    FetchFailed(String),
    StatusUpdated { id: String, status: ReportStatus },
    StatusUpdateFailed(String),
    OpenModal,
    CloseModal,
    DescriptionChanged(String),
    TesterNameChanged(String),
    ScreenshotReadStarted,
    ScreenshotSelected(Screenshot),
    ScreenshotReadFailed,
    ScreenshotRejected(ScreenshotRejection),
    ScreenshotRemoved,
    SubmitStarted,
    SubmitRejected(Vec<FieldError>),
    SubmitSucceeded,
    SubmitFailed(String),
    PageChanged(usize),
    NoticeDismissed(u64),
}

/// Compute the state that follows `action`
pub fn reduce(state: &AdminState, action: Action) -> AdminState {
    let mut next = state.clone();
    match action {
        Action::FetchStarted => next.loading = true,
        Action::FetchSucceeded(reports) => {
            next.reports = reports;
            next.loading = false;
            next.page = next.page.min(page_count(next.reports.len(), PAGE_SIZE) - 1);
        }
        Action::FetchFailed(text) => {
            next.loading = false;
            next.push_notice(NoticeKind::Error, text);
        }
        Action::StatusUpdated { id, status } => {
            if let Some(report) = next.reports.iter_mut().find(|r| r.id == id) {
                report.status = status;
            }
            next.push_notice(NoticeKind::Success, STATUS_UPDATED.to_string());
        }
        Action::StatusUpdateFailed(text) => next.push_notice(NoticeKind::Error, text),
        Action::OpenModal => next.modal_open = true,
        Action::CloseModal => {
            next.modal_open = false;
            next.form = ReportForm::default();
        }
        Action::DescriptionChanged(text) => {
            next.form.description = text;
            next.form.field_errors.retain(|e| e.field != Field::Description);
        }
        Action::TesterNameChanged(text) => next.form.tester_name = text,
        Action::ScreenshotReadStarted => {
            if next.accepts_screenshot() {
                next.form.reading = true;
            }
        }
        // A read that outlives its form (closed, reset or already submitted) is dropped
        Action::ScreenshotSelected(_) if !(next.accepts_screenshot() && next.form.reading) => {}
        Action::ScreenshotSelected(screenshot) => {
            next.form.reading = false;
            match check_screenshot(next.form.screenshot.as_ref(), &screenshot.content_type) {
                Ok(()) => {
                    next.form.screenshot = Some(screenshot);
                    next.form.field_errors.retain(|e| e.field != Field::Screenshot);
                }
                Err(rejection) => next.push_notice(NoticeKind::Error, rejection.message().to_string()),
            }
        }
        Action::ScreenshotReadFailed => {
            next.form.reading = false;
            next.push_notice(NoticeKind::Error, SCREENSHOT_READ_FAILED.to_string());
        }
        Action::ScreenshotRejected(rejection) => {
            next.push_notice(NoticeKind::Error, rejection.message().to_string());
        }
        Action::ScreenshotRemoved => next.form.screenshot = None,
        Action::SubmitStarted => {
            next.submit_loading = true;
            next.form.reading = false;
            next.form.field_errors.clear();
        }
        Action::SubmitRejected(errors) => {
            next.submit_loading = false;
            next.form.field_errors = errors;
        }
        Action::SubmitSucceeded => {
            next.submit_loading = false;
            next.modal_open = false;
            next.form = ReportForm::default();
            next.push_notice(NoticeKind::Success, REPORT_CREATED.to_string());
        }
        Action::SubmitFailed(text) => {
            next.submit_loading = false;
            next.push_notice(NoticeKind::Error, text);
        }
        Action::PageChanged(page) => {
            next.page = page.min(page_count(next.reports.len(), PAGE_SIZE) - 1);
        }
        Action::NoticeDismissed(id) => next.notices.retain(|n| n.id != id),
    }
    next
}

impl AdminState {
    /// The form is open and editable
    fn accepts_screenshot(&self) -> bool {
        self.modal_open && !self.submit_loading
    }

    fn push_notice(&mut self, kind: NoticeKind, text: String) {
        self.notices.push(Notice { id: self.next_notice_id, kind, text });
        self.next_notice_id += 1;
    }

    /// Notices added by the transition from `self` to `after`
    pub fn notices_added_in<'a>(&self, after: &'a AdminState) -> impl Iterator<Item = &'a Notice> + 'a {
        let first_new = self.next_notice_id;
        after.notices.iter().filter(move |n| n.id >= first_new)
    }
}

/// Number of pages needed for `total` rows; an empty table still has one page
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Row range shown on `page`, clamped to the data
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    start..end
}

/// Reports shown on `page` of the table
pub fn page_slice(reports: &[Report], page: usize) -> &[Report] {
    &reports[page_bounds(reports.len(), page, PAGE_SIZE)]
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;
