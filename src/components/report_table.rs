//! Report Table Component
//!
//! One row per report on the current page, with a status dropdown per row.

use leptos::prelude::*;

use crate::components::{Pager, StatusTag};
use crate::context::use_app_context;
use crate::format::{format_created_at, screenshot_link, NO_SCREENSHOT, VIEW_IMAGE};
use crate::models::{Report, ReportStatus, STATUS_OPTIONS};
use crate::store::{page_slice, AdminStateStoreFields};

#[component]
pub fn ReportTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let loading = move || store.loading().get();

    // Rows depend on the report list and the page only
    let rows = move || {
        let page = store.page().get();
        store
            .reports()
            .with(|reports| page_slice(reports, page).to_vec())
            .into_iter()
            .map(|report| view! { <ReportRow report=report /> })
            .collect_view()
    };

    view! {
        <div class=move || if loading() { "report-table loading" } else { "report-table" }>
            <table>
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th>"Status"</th>
                        <th>"Tester"</th>
                        <th>"Date"</th>
                        <th>"Screenshot"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || !loading() && store.reports().with(|r| r.is_empty())>
                <p class="empty">"No reports yet"</p>
            </Show>
            <Show when=loading>
                <div class="loading-overlay">"Loading..."</div>
            </Show>
            <Pager />
        </div>
    }
}

#[component]
fn ReportRow(report: Report) -> impl IntoView {
    let ctx = use_app_context();
    let Report { id, description, tester_name, status, created_at, screenshot_url } = report;

    let screenshot = match screenshot_link(screenshot_url.as_deref()) {
        Some(url) => view! {
            <a href=url.to_string() target="_blank" rel="noopener noreferrer">{VIEW_IMAGE}</a>
        }
        .into_any(),
        None => view! { <span class="muted">{NO_SCREENSHOT}</span> }.into_any(),
    };

    let select_ref = NodeRef::<leptos::html::Select>::new();
    let current = status.clone();
    let on_change = move |ev: web_sys::Event| {
        let chosen = ReportStatus::parse(&event_target_value(&ev));
        if chosen == current {
            return;
        }
        // A refused update leaves the list untouched, so the row is not
        // rebuilt; put the stored status back by hand.
        let stored = current.as_str().to_string();
        ctx.change_status(id.clone(), chosen, move || {
            if let Some(select) = select_ref.get_untracked() {
                select.set_value(&stored);
            }
        });
    };

    // A status outside the known three gets its own disabled entry so the
    // dropdown still shows what the service holds.
    let unknown_option = match &status {
        ReportStatus::Other(raw) => Some(view! {
            <option value=raw.clone() selected=true disabled=true>{raw.clone()}</option>
        }),
        _ => None,
    };
    let options = STATUS_OPTIONS
        .iter()
        .map(|(value, label)| {
            view! {
                <option value=value.as_str().to_string() selected={value == &status}>
                    {*label}
                </option>
            }
        })
        .collect_view();

    view! {
        <tr>
            <td>{description}</td>
            <td><StatusTag status=status.clone() /></td>
            <td>{tester_name.unwrap_or_default()}</td>
            <td>{format_created_at(&created_at)}</td>
            <td>{screenshot}</td>
            <td>
                <select class="status-select" node_ref=select_ref on:change=on_change>
                    {unknown_option}
                    {options}
                </select>
            </td>
        </tr>
    }
}
