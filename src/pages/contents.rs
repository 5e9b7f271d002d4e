//! Contents page listing the available documents.

use leptos::prelude::*;

use crate::components::document_link::DocumentLink;

/// Contents page — the library index. Document discovery belongs to an
/// external collaborator; until one is wired in, the listing renders an
/// empty-state hint.
#[component]
pub fn ContentsPage() -> impl IntoView {
    let documents: Vec<(String, String)> = Vec::new();

    view! {
        <div class="contents-page">
            <header class="contents-page__header">
                <h1>"Contents"</h1>
            </header>

            <div class="contents-page__list">
                {if documents.is_empty() {
                    view! { <p class="contents-page__empty">"No documents yet."</p> }.into_any()
                } else {
                    documents
                        .into_iter()
                        .map(|(id, title)| view! { <DocumentLink id=id title=title/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
