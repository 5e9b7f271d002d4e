//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{contents::ContentsPage, document::DocumentPage, not_found::NotFoundPage};

/// Root application component.
///
/// Sets up history-API routing over the two views. The live declarations
/// here mirror the table in [`crate::routes`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="docshelf" href="/style.css"/>
        <Title text="Docshelf"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=ContentsPage/>
                <Route path=(StaticSegment("documents"), ParamSegment("uuid")) view=DocumentPage/>
            </Routes>
        </Router>
    }
}
