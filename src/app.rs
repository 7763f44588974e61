//! Test Reports Admin App
//!
//! Root component: header, report table, creation modal and notices.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpReportsApi;
use crate::components::{CreateReportModal, NoticeStack, ReportTable};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{Action, AdminState};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let store = Store::new(AdminState::default());
    let ctx = AppContext::new(store, Rc::new(HttpReportsApi::new(config)));

    // Provide context to all children
    provide_context(ctx);

    // Load reports on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <div class="admin-layout">
            <div class="admin-header">
                <h1>"Test Reports"</h1>
                <button class="primary" on:click=move |_| ctx.dispatch(Action::OpenModal)>
                    "Create New Report"
                </button>
            </div>

            <ReportTable />
            <CreateReportModal />
            <NoticeStack />
        </div>
    }
}
