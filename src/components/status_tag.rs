//! Status Tag Component

use leptos::prelude::*;

use crate::format::{status_color, status_label};
use crate::models::ReportStatus;

/// Colored tag showing a report status
#[component]
pub fn StatusTag(status: ReportStatus) -> impl IntoView {
    view! {
        <span class=status_color(&status).css_class()>
            {status_label(&status)}
        </span>
    }
}
