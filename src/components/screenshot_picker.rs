//! Screenshot Picker Component
//!
//! Single-slot image picker. The type and slot are checked before the file is
//! read, so rejected files never reach the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::context::use_app_context;
use crate::models::Screenshot;
use crate::store::{Action, AdminStateStoreFields};
use crate::validation::check_screenshot;

async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[component]
pub fn ScreenshotPicker() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Clear so picking the same file again still fires a change
        input.set_value("");
        let Some(file) = file else { return };

        let content_type = file.type_();
        let verdict = store
            .form()
            .with_untracked(|form| check_screenshot(form.screenshot.as_ref(), &content_type));
        if let Err(rejection) = verdict {
            tracing::warn!(name = %file.name(), %content_type, ?rejection, "[UPLOAD] file rejected");
            ctx.dispatch(Action::ScreenshotRejected(rejection));
            return;
        }

        ctx.dispatch(Action::ScreenshotReadStarted);
        spawn_local(async move {
            match read_bytes(&file).await {
                Ok(bytes) => ctx.dispatch(Action::ScreenshotSelected(Screenshot {
                    file_name: file.name(),
                    content_type,
                    bytes,
                })),
                Err(e) => {
                    tracing::error!(name = %file.name(), error = %e, "[UPLOAD] read failed");
                    ctx.dispatch(Action::ScreenshotReadFailed);
                }
            }
        });
    };

    let reading = move || store.form().with(|form| form.reading);
    let staged = move || {
        store.form().with(|form| {
            form.screenshot
                .as_ref()
                .map(|s| format!("{} ({} KB)", s.file_name, s.bytes.len().div_ceil(1024)))
        })
    };

    view! {
        <div class="screenshot-picker">
            <label class="upload-btn" class:disabled=reading>
                {move || if reading() { "Reading..." } else { "Click to upload" }}
                <input
                    type="file"
                    accept="image/*"
                    class="hidden-input"
                    disabled=reading
                    on:change=on_change
                />
            </label>
            {move || staged().map(|label| view! {
                <div class="staged-file">
                    <span>{label}</span>
                    <button
                        type="button"
                        class="remove-btn"
                        title="Remove"
                        on:click=move |_| ctx.dispatch(Action::ScreenshotRemoved)
                    >
                        "×"
                    </button>
                </div>
            })}
        </div>
    }
}
