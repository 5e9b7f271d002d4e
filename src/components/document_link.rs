//! Reusable card component for document list entries on the contents page.

use leptos::prelude::*;

use crate::routes::document_href;

/// A clickable card linking a document to its viewer route.
#[component]
pub fn DocumentLink(id: String, title: String) -> impl IntoView {
    let href = document_href(&id);

    view! {
        <a class="document-link" href=href>
            <span class="document-link__title">{title}</span>
        </a>
    }
}
