//! Document viewer page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Document viewer shell. Reads the document id from the `:uuid` route
/// parameter; content rendering belongs to an external collaborator.
#[component]
pub fn DocumentPage() -> impl IntoView {
    let params = use_params_map();
    let uuid = move || params.read().get("uuid").unwrap_or_default();

    view! {
        <div class="document-page">
            <header class="document-page__header">
                <a class="document-page__back" href="/">
                    "← Contents"
                </a>
                <span class="document-page__id">{uuid}</span>
            </header>
            <div class="document-page__body"></div>
        </div>
    }
}
