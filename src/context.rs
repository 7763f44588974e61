//! Application Context
//!
//! The admin store and the injected Reports Service client, provided via the
//! Leptos Context API.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ReportsApi;
use crate::config::NOTICE_TTL_MS;
use crate::flows;
use crate::models::ReportStatus;
use crate::store::{reduce, Action, AdminState, AdminStateStoreFields, AdminStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Admin view state
    pub store: AdminStore,
    /// Reports Service client (not `Send`, so it lives in local storage)
    api: StoredValue<Rc<dyn ReportsApi>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AdminStore, api: Rc<dyn ReportsApi>) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    /// Apply an action to the store and schedule expiry of any notice it raised
    pub fn dispatch(&self, action: Action) {
        let (next, fresh) = self.store.with_untracked(|state| {
            let next = reduce(state, action);
            let fresh: Vec<u64> = state.notices_added_in(&next).map(|n| n.id).collect();
            (next, fresh)
        });
        self.commit(next);
        for id in fresh {
            self.expire_notice(id);
        }
    }

    /// Write back only the fields that changed, so views subscribed to one
    /// field are not woken by edits elsewhere
    fn commit(&self, next: AdminState) {
        let AdminState {
            reports,
            loading,
            submit_loading,
            modal_open,
            form,
            notices,
            page,
            next_notice_id,
        } = next;
        let store = self.store;
        if store.reports().with_untracked(|current| *current != reports) {
            store.reports().set(reports);
        }
        if store.loading().get_untracked() != loading {
            store.loading().set(loading);
        }
        if store.submit_loading().get_untracked() != submit_loading {
            store.submit_loading().set(submit_loading);
        }
        if store.modal_open().get_untracked() != modal_open {
            store.modal_open().set(modal_open);
        }
        if store.form().with_untracked(|current| *current != form) {
            store.form().set(form);
        }
        if store.notices().with_untracked(|current| *current != notices) {
            store.notices().set(notices);
        }
        if store.page().get_untracked() != page {
            store.page().set(page);
        }
        if store.next_notice_id().get_untracked() != next_notice_id {
            store.next_notice_id().set(next_notice_id);
        }
    }

    fn expire_notice(&self, id: u64) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            ctx.dispatch(Action::NoticeDismissed(id));
        });
    }

    /// Reload the report list
    pub fn refresh(&self) {
        let ctx = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            flows::fetch_reports(api.as_ref(), &|a: Action| ctx.dispatch(a)).await;
        });
    }

    /// Push a status change; a refusal leaves the stored status as it was and
    /// runs `on_refused`
    pub fn change_status(&self, id: String, status: ReportStatus, on_refused: impl FnOnce() + 'static) {
        let ctx = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            if !flows::change_status(api.as_ref(), &|a: Action| ctx.dispatch(a), id, status).await {
                on_refused();
            }
        });
    }

    /// Submit the creation form as it currently stands
    pub fn submit(&self) {
        let ctx = *self;
        let api = self.api.get_value();
        let form = self.store.with_untracked(|state| state.form.clone());
        spawn_local(async move {
            flows::submit_report(api.as_ref(), &|a: Action| ctx.dispatch(a), &form).await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
