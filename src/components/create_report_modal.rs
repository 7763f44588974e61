//! Create Report Modal
//!
//! Creation form in a modal dialog. Field values live in the store so that
//! closing, submitting and failing all go through the same transitions.

use leptos::prelude::*;

use crate::components::ScreenshotPicker;
use crate::context::use_app_context;
use crate::store::{Action, AdminStateStoreFields};
use crate::validation::Field;

#[component]
pub fn CreateReportModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let submitting = move || store.submit_loading().get();
    let reading = move || store.form().with(|form| form.reading);

    let close = move |_| {
        if !submitting() {
            ctx.dispatch(Action::CloseModal);
        }
    };
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let reading = store.form().with_untracked(|form| form.reading);
        if !store.submit_loading().get_untracked() && !reading {
            ctx.submit();
        }
    };

    let field_error = move |field: Field| {
        move || {
            store
                .form()
                .with(|form| form.error_for(field).map(str::to_string))
                .map(|message| view! { <div class="field-error">{message}</div> })
        }
    };

    view! {
        <Show when=move || store.modal_open().get()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-labelledby="create-report-title">
                    <div class="modal-header">
                        <h2 id="create-report-title">"Create Test Report"</h2>
                        <button type="button" class="modal-close" title="Close" on:click=close>"✕"</button>
                    </div>
                    <form class="report-form" on:submit=submit>
                        <label for="report-description">"Problem Description"</label>
                        <textarea
                            id="report-description"
                            rows="4"
                            placeholder="Enter a detailed description of the bug or test result."
                            class:invalid=move || store.form().with(|f| f.error_for(Field::Description).is_some())
                            prop:value=move || store.form().with(|f| f.description.clone())
                            on:input=move |ev| ctx.dispatch(Action::DescriptionChanged(event_target_value(&ev)))
                        />
                        {field_error(Field::Description)}

                        <label for="report-tester">"Your Name (Optional)"</label>
                        <input
                            id="report-tester"
                            type="text"
                            placeholder="e.g., John Doe"
                            prop:value=move || store.form().with(|f| f.tester_name.clone())
                            on:input=move |ev| ctx.dispatch(Action::TesterNameChanged(event_target_value(&ev)))
                        />

                        <label>"Screenshot (Optional)"</label>
                        <ScreenshotPicker />
                        {field_error(Field::Screenshot)}

                        <div class="modal-footer">
                            <button type="button" on:click=close disabled=submitting>"Cancel"</button>
                            <button type="submit" class="primary" disabled=move || submitting() || reading()>
                                {move || if submitting() { "Submitting..." } else { "OK" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
