//! Fallback view for unmatched paths.

use leptos::prelude::*;

/// Not-found page — rendered by the router for any path outside the table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <a href="/">"Back to contents"</a>
        </div>
    }
}
