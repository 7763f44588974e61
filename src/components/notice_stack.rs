//! Notice Stack Component
//!
//! Transient success/error toasts. They expire on their own; a click dismisses early.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{Action, AdminStateStoreFields, NoticeKind};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_app_context();
    let notices = ctx.store.notices();

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice success",
                        NoticeKind::Error => "notice error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class role="status" on:click=move |_| ctx.dispatch(Action::NoticeDismissed(id))>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
