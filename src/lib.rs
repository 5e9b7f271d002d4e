//! # docshelf
//!
//! Leptos + WASM front-end for a small document library: a contents page
//! listing documents and a viewer page addressed by document id.
//!
//! This crate is the application bootstrap and routing layer. At startup it
//! resolves the color theme (persisted preference first, system preference
//! as fallback) and applies it to the document root, then mounts the root
//! component into the `#app` host element. Views themselves are thin
//! shells; content loading lives with external collaborators.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod util;

use crate::util::theme::ApplyPolicy;

/// Bootstrap the application: apply the theme, then mount into `#app`.
///
/// The theme is applied before the UI root is constructed so the first
/// paint already carries the right class. A missing `#app` element is
/// fatal: the error is logged and nothing renders.
pub fn boot(policy: ApplyPolicy) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        util::theme::init(policy);

        let mount = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        match mount {
            Some(el) => {
                leptos::mount::mount_to(el, app::App).forget();
            }
            None => {
                log::error!("mount point #app not found, application will not render");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = policy;
    }
}

/// WASM entry point. Runs the bootstrap with the default strict theme
/// policy.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    boot(ApplyPolicy::default());
}
