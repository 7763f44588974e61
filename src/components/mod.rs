//! UI Components
//!
//! Leptos components of the admin view.

mod status_tag;
mod report_table;
mod pager;
mod create_report_modal;
mod screenshot_picker;
mod notice_stack;
mod config_error;

pub use status_tag::StatusTag;
pub use report_table::ReportTable;
pub use pager::Pager;
pub use create_report_modal::CreateReportModal;
pub use screenshot_picker::ScreenshotPicker;
pub use notice_stack::NoticeStack;
pub use config_error::ConfigErrorView;
