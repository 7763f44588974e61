//! Admin Operations
//!
//! The three network-backed operations of the admin view. Each one talks to a
//! `ReportsApi` and reports progress as `Action`s, so it runs the same against
//! the live store or a test recorder.

use crate::api::ReportsApi;
use crate::models::ReportStatus;
use crate::store::{Action, ReportForm};
use crate::validation::validate_report_form;

pub const FETCH_FAILED: &str = "Failed to fetch reports";
pub const UPDATE_FAILED: &str = "Update failed";
pub const CREATE_FAILED: &str = "Failed to create report";

/// Load the full report list, replacing whatever is shown
pub async fn fetch_reports(api: &dyn ReportsApi, dispatch: &dyn Fn(Action)) {
    dispatch(Action::FetchStarted);
    match api.list_reports().await {
        Ok(reports) => {
            tracing::info!(count = reports.len(), "[REPORTS] loaded");
            dispatch(Action::FetchSucceeded(reports));
        }
        Err(e) => {
            tracing::error!(error = %e, "[REPORTS] fetch failed");
            dispatch(Action::FetchFailed(e.notice_text(FETCH_FAILED)));
        }
    }
}

/// Change one report's status; the local copy changes only once the service confirms.
///
/// Returns whether the update was applied.
pub async fn change_status(
    api: &dyn ReportsApi,
    dispatch: &dyn Fn(Action),
    id: String,
    status: ReportStatus,
) -> bool {
    match api.update_status(&id, &status).await {
        Ok(echoed) => {
            tracing::info!(%id, %status, echoed = echoed.is_some(), "[REPORTS] status updated");
            dispatch(Action::StatusUpdated { id, status });
            true
        }
        Err(e) => {
            tracing::error!(%id, %status, error = %e, "[REPORTS] status update failed");
            dispatch(Action::StatusUpdateFailed(e.notice_text(UPDATE_FAILED)));
            false
        }
    }
}

/// Validate and send the creation form, then refresh the list on success
pub async fn submit_report(api: &dyn ReportsApi, dispatch: &dyn Fn(Action), form: &ReportForm) {
    dispatch(Action::SubmitStarted);
    let new_report = match validate_report_form(form) {
        Ok(new_report) => new_report,
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "[REPORTS] creation form invalid");
            dispatch(Action::SubmitRejected(errors));
            return;
        }
    };

    match api.create_report(&new_report).await {
        Ok(created) => {
            tracing::info!(id = %created.id, "[REPORTS] created");
            dispatch(Action::SubmitSucceeded);
            fetch_reports(api, dispatch).await;
        }
        Err(e) => {
            tracing::error!(error = %e, "[REPORTS] create failed");
            dispatch(Action::SubmitFailed(e.notice_text(CREATE_FAILED)));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::*;
    use crate::api::ApiError;
    use crate::models::{NewReport, Report, Screenshot};
    use crate::store::{reduce, AdminState, NoticeKind};

    /// What the fake saw, in call order
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(Vec<String>),
        UpdateStatus(String, ReportStatus),
    }

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        list_results: RefCell<VecDeque<Result<Vec<Report>, ApiError>>>,
        create_result: RefCell<Option<Result<Report, ApiError>>>,
        update_result: RefCell<Option<Result<Option<Report>, ApiError>>>,
    }

    #[async_trait(?Send)]
    impl ReportsApi for FakeApi {
        async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            self.list_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create_report(&self, report: &NewReport) -> Result<Report, ApiError> {
            let names = report.form_fields().iter().map(|f| f.name().to_string()).collect();
            self.calls.borrow_mut().push(Call::Create(names));
            self.create_result
                .borrow_mut()
                .take()
                .expect("create_result not primed")
        }

        async fn update_status(&self, id: &str, status: &ReportStatus) -> Result<Option<Report>, ApiError> {
            self.calls.borrow_mut().push(Call::UpdateStatus(id.to_string(), status.clone()));
            self.update_result
                .borrow_mut()
                .take()
                .expect("update_result not primed")
        }
    }

    /// Applies dispatched actions the way the live store does
    struct Harness {
        state: RefCell<AdminState>,
    }

    impl Harness {
        fn new(state: AdminState) -> Self {
            Self { state: RefCell::new(state) }
        }

        fn dispatch(&self, action: Action) {
            let next = reduce(&self.state.borrow(), action);
            *self.state.borrow_mut() = next;
        }

        fn state(&self) -> AdminState {
            self.state.borrow().clone()
        }
    }

    fn make_report(id: &str, description: &str, status: ReportStatus) -> Report {
        Report {
            id: id.to_string(),
            description: description.to_string(),
            tester_name: Some("Jo".to_string()),
            status,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            screenshot_url: None,
        }
    }

    fn not_found() -> ApiError {
        ApiError::Service { status: 404, detail: Some("Not found".to_string()) }
    }

    #[tokio::test]
    async fn test_fetch_replaces_reports() {
        let api = FakeApi::default();
        api.list_results
            .borrow_mut()
            .push_back(Ok(vec![make_report("1", "Button broken", ReportStatus::Open)]));
        let harness = Harness::new(AdminState::default());

        fetch_reports(&api, &|a: Action| harness.dispatch(a)).await;

        let state = harness.state();
        assert!(!state.loading);
        assert_eq!(state.reports.len(), 1);
        assert_eq!(state.reports[0].description, "Button broken");
        assert!(state.notices.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_uses_fallback_text() {
        let api = FakeApi::default();
        api.list_results
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
        let harness = Harness::new(AdminState::default());

        fetch_reports(&api, &|a: Action| harness.dispatch(a)).await;

        let state = harness.state();
        assert!(!state.loading);
        assert!(state.reports.is_empty());
        assert_eq!(state.notices[0].text, FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_change_status_success() {
        let api = FakeApi::default();
        *api.update_result.borrow_mut() = Some(Ok(None));
        let initial = reduce(
            &AdminState::default(),
            Action::FetchSucceeded(vec![
                make_report("1", "a", ReportStatus::Open),
                make_report("2", "b", ReportStatus::Open),
            ]),
        );
        let harness = Harness::new(initial.clone());

        let applied = change_status(&api, &|a: Action| harness.dispatch(a), "1".to_string(), ReportStatus::Resolved).await;

        assert!(applied);
        let state = harness.state();
        assert_eq!(state.reports[0].status, ReportStatus::Resolved);
        assert_eq!(state.reports[1], initial.reports[1]);
        assert_eq!(state.notices[0].kind, NoticeKind::Success);
        // no refetch after a status change
        assert_eq!(
            *api.calls.borrow(),
            vec![Call::UpdateStatus("1".to_string(), ReportStatus::Resolved)]
        );
    }

    #[tokio::test]
    async fn test_change_status_failure_shows_detail() {
        let api = FakeApi::default();
        *api.update_result.borrow_mut() = Some(Err(not_found()));
        let initial = reduce(
            &AdminState::default(),
            Action::FetchSucceeded(vec![make_report("1", "a", ReportStatus::Open)]),
        );
        let harness = Harness::new(initial.clone());

        let applied = change_status(&api, &|a: Action| harness.dispatch(a), "1".to_string(), ReportStatus::Resolved).await;

        assert!(!applied);
        let state = harness.state();
        assert_eq!(state.reports, initial.reports);
        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].kind, NoticeKind::Error);
        assert_eq!(state.notices[0].text, "Not found");
    }

    #[tokio::test]
    async fn test_submit_description_only_then_refetch() {
        let api = FakeApi::default();
        *api.create_result.borrow_mut() = Some(Ok(make_report("9", "Crash on save", ReportStatus::Open)));
        api.list_results
            .borrow_mut()
            .push_back(Ok(vec![make_report("9", "Crash on save", ReportStatus::Open)]));

        let harness = Harness::new(AdminState::default());
        harness.dispatch(Action::OpenModal);
        harness.dispatch(Action::DescriptionChanged("Crash on save".to_string()));
        let form = harness.state().form;

        submit_report(&api, &|a: Action| harness.dispatch(a), &form).await;

        assert_eq!(
            *api.calls.borrow(),
            vec![Call::Create(vec!["description".to_string()]), Call::List]
        );
        let state = harness.state();
        assert!(!state.modal_open);
        assert!(!state.submit_loading);
        assert!(state.form.description.is_empty());
        assert_eq!(state.reports.len(), 1);
        assert_eq!(state.reports[0].id, "9");
    }

    #[tokio::test]
    async fn test_submit_with_tester_and_screenshot() {
        let api = FakeApi::default();
        *api.create_result.borrow_mut() = Some(Ok(make_report("3", "Layout", ReportStatus::Open)));

        let harness = Harness::new(AdminState::default());
        harness.dispatch(Action::OpenModal);
        harness.dispatch(Action::DescriptionChanged("Layout".to_string()));
        harness.dispatch(Action::TesterNameChanged("Jo".to_string()));
        harness.dispatch(Action::ScreenshotReadStarted);
        harness.dispatch(Action::ScreenshotSelected(Screenshot {
            file_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2],
        }));
        let form = harness.state().form;

        submit_report(&api, &|a: Action| harness.dispatch(a), &form).await;

        assert_eq!(
            api.calls.borrow()[0],
            Call::Create(vec!["description".to_string(), "tester_name".to_string(), "file".to_string()])
        );
    }

    #[tokio::test]
    async fn test_submit_invalid_issues_no_request() {
        let api = FakeApi::default();
        let harness = Harness::new(AdminState::default());
        harness.dispatch(Action::OpenModal);
        let form = harness.state().form;

        submit_report(&api, &|a: Action| harness.dispatch(a), &form).await;

        assert!(api.calls.borrow().is_empty());
        let state = harness.state();
        assert!(state.modal_open);
        assert!(!state.submit_loading);
        assert_eq!(state.form.field_errors.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_modal_for_retry() {
        let api = FakeApi::default();
        *api.create_result.borrow_mut() = Some(Err(ApiError::Service { status: 500, detail: None }));
        let harness = Harness::new(AdminState::default());
        harness.dispatch(Action::OpenModal);
        harness.dispatch(Action::DescriptionChanged("Crash".to_string()));
        let form = harness.state().form;

        submit_report(&api, &|a: Action| harness.dispatch(a), &form).await;

        let state = harness.state();
        assert!(state.modal_open);
        assert!(!state.submit_loading);
        assert_eq!(state.form.description, "Crash");
        assert_eq!(state.notices.last().unwrap().text, CREATE_FAILED);
        assert_eq!(api.calls.borrow().len(), 1);
    }
}
