//! Pager Component
//!
//! Fixed-size table paging; hidden while everything fits on one page.

use leptos::prelude::*;

use crate::config::PAGE_SIZE;
use crate::context::use_app_context;
use crate::store::{page_count, Action, AdminStateStoreFields};

#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let page = move || store.page().get();
    let pages = move || store.reports().with(|reports| page_count(reports.len(), PAGE_SIZE));

    view! {
        <Show when=move || { pages() > 1 }>
            <div class="pager">
                <button
                    disabled=move || page() == 0
                    on:click=move |_| ctx.dispatch(Action::PageChanged(page().saturating_sub(1)))
                >
                    "‹"
                </button>
                <span class="pager-label">{move || format!("Page {} / {}", page() + 1, pages())}</span>
                <button
                    disabled=move || page() + 1 >= pages()
                    on:click=move |_| ctx.dispatch(Action::PageChanged(page() + 1))
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
