//! Color theme initialization.
//!
//! Reads the user's preference from `localStorage` (key `"theme"`) and
//! applies the matching `.dark-theme` / `.light-theme` class to the
//! `<html>` element. When no preference is stored, falls back to a one-time
//! snapshot of the `(prefers-color-scheme: dark)` media query. This module
//! only reads the preference; writing it back is the settings UI's job.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// A visual mode, expressed as a class token on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Class token carried on the document root for this mode.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    /// The other mode.
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// How [`apply`] treats a class token left over from a previous state.
///
/// The strict policy removes the opposite token on every application, so
/// the root always ends up with exactly one of the two classes. The
/// additive policy only ever adds, and can leave both classes present if
/// the opposite was already set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplyPolicy {
    #[default]
    StrictToggle,
    AdditiveOnly,
}

/// A mutable class list the theme can be applied to.
///
/// Abstracting the document root behind this trait keeps resolution and
/// application pure and testable without a browser.
pub trait ThemeTarget {
    fn add_class(&mut self, token: &str);
    fn remove_class(&mut self, token: &str);
}

/// Resolve the theme from the stored preference and the system signal.
///
/// A stored value equal to `"dark"` selects [`Theme::Dark`]; any other
/// non-empty stored string selects [`Theme::Light`]. With no stored value
/// (or an empty one), the system preference decides.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(value) if !value.is_empty() => Theme::Light,
        _ => {
            if system_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Apply `theme` to `target` under the given policy.
pub fn apply(target: &mut dyn ThemeTarget, theme: Theme, policy: ApplyPolicy) {
    target.add_class(theme.class());
    if policy == ApplyPolicy::StrictToggle {
        target.remove_class(theme.opposite().class());
    }
}

/// Read the persisted preference from `localStorage`.
///
/// A storage read failure (security or quota errors in restrictive
/// embedding contexts) is treated the same as an absent preference, so
/// boot degrades to the system-preference branch instead of failing.
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => match storage.get_item(STORAGE_KEY) {
                Ok(value) => value,
                Err(_) => {
                    log::warn!("theme preference read failed, using system preference");
                    None
                }
            },
            Ok(None) => None,
            Err(_) => {
                log::warn!("localStorage unavailable, using system preference");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// One-time snapshot of the `(prefers-color-scheme: dark)` media query.
/// Not subscribed for changes.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// The `<html>` element's class list.
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn add_class(&mut self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().add_1(token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove_class(&mut self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().remove_1(token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }
}

/// One-shot boot-time initialization against the real document root.
///
/// Invoked once, before the UI root is constructed. The system preference
/// is only consulted when no preference is stored.
pub fn init(policy: ApplyPolicy) {
    let stored = read_stored();
    let need_system = stored.as_deref().is_none_or(str::is_empty);
    let theme = resolve(stored.as_deref(), need_system && system_prefers_dark());
    apply(&mut DocumentRoot, theme, policy);
}
