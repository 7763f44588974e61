//! Configuration Error View
//!
//! Mounted instead of the admin panel when the service URL is unusable.

use leptos::prelude::*;

#[component]
pub fn ConfigErrorView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Test Reports"</h1>
            <p>"The Reports Service location is not configured."</p>
            <pre>{message}</pre>
            <p>"Rebuild with REPORTS_API_URL set, e.g. REPORTS_API_URL=http://localhost:8000 trunk build"</p>
        </div>
    }
}
