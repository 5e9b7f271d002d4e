use super::*;

/// In-memory class list standing in for the document root.
#[derive(Default)]
struct FakeRoot {
    classes: Vec<String>,
}

impl ThemeTarget for FakeRoot {
    fn add_class(&mut self, token: &str) {
        if !self.classes.iter().any(|c| c == token) {
            self.classes.push(token.to_owned());
        }
    }

    fn remove_class(&mut self, token: &str) {
        self.classes.retain(|c| c != token);
    }
}

impl FakeRoot {
    fn with(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|&c| c.to_owned()).collect(),
        }
    }

    fn has(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }
}

fn init_into(
    root: &mut FakeRoot,
    stored: Option<&str>,
    system_prefers_dark: bool,
    policy: ApplyPolicy,
) {
    let theme = resolve(stored, system_prefers_dark);
    apply(root, theme, policy);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn stored_dark_resolves_dark() {
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve(Some("dark"), true), Theme::Dark);
}

#[test]
fn stored_light_resolves_light() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
}

#[test]
fn stored_unknown_value_resolves_light() {
    assert_eq!(resolve(Some("sepia"), true), Theme::Light);
}

#[test]
fn no_stored_value_follows_system_signal() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn empty_stored_value_behaves_as_absent() {
    assert_eq!(resolve(Some(""), true), Theme::Dark);
    assert_eq!(resolve(Some(""), false), Theme::Light);
}

// =============================================================
// Application, strict policy
// =============================================================

#[test]
fn strict_stored_dark_sets_only_dark_class() {
    let mut root = FakeRoot::default();
    init_into(&mut root, Some("dark"), false, ApplyPolicy::StrictToggle);
    assert!(root.has("dark-theme"));
    assert!(!root.has("light-theme"));
}

#[test]
fn strict_stored_light_sets_only_light_class() {
    let mut root = FakeRoot::default();
    init_into(&mut root, Some("light"), true, ApplyPolicy::StrictToggle);
    assert!(root.has("light-theme"));
    assert!(!root.has("dark-theme"));
}

#[test]
fn strict_system_dark_fallback() {
    let mut root = FakeRoot::default();
    init_into(&mut root, None, true, ApplyPolicy::StrictToggle);
    assert!(root.has("dark-theme"));
    assert!(!root.has("light-theme"));
}

#[test]
fn strict_system_light_fallback() {
    let mut root = FakeRoot::default();
    init_into(&mut root, None, false, ApplyPolicy::StrictToggle);
    assert!(root.has("light-theme"));
    assert!(!root.has("dark-theme"));
}

#[test]
fn strict_corrects_stale_opposite_class() {
    let mut root = FakeRoot::with(&["light-theme"]);
    init_into(&mut root, Some("dark"), false, ApplyPolicy::StrictToggle);
    assert_eq!(root.classes, vec!["dark-theme"]);
}

#[test]
fn strict_is_idempotent() {
    let mut once = FakeRoot::default();
    init_into(&mut once, Some("dark"), false, ApplyPolicy::StrictToggle);

    let mut twice = FakeRoot::default();
    init_into(&mut twice, Some("dark"), false, ApplyPolicy::StrictToggle);
    init_into(&mut twice, Some("dark"), false, ApplyPolicy::StrictToggle);

    assert_eq!(once.classes, twice.classes);
}

#[test]
fn strict_preserves_unrelated_classes() {
    let mut root = FakeRoot::with(&["no-js", "light-theme"]);
    init_into(&mut root, Some("dark"), false, ApplyPolicy::StrictToggle);
    assert!(root.has("no-js"));
    assert!(root.has("dark-theme"));
    assert!(!root.has("light-theme"));
}

// =============================================================
// Application, additive policy
// =============================================================

#[test]
fn additive_sets_resolved_class_on_clean_root() {
    let mut root = FakeRoot::default();
    init_into(&mut root, Some("dark"), false, ApplyPolicy::AdditiveOnly);
    assert_eq!(root.classes, vec!["dark-theme"]);
}

#[test]
fn additive_retains_stale_opposite_class() {
    let mut root = FakeRoot::with(&["light-theme"]);
    init_into(&mut root, Some("dark"), false, ApplyPolicy::AdditiveOnly);
    assert!(root.has("dark-theme"));
    assert!(root.has("light-theme"));
}

// =============================================================
// Theme helpers
// =============================================================

#[test]
fn class_tokens_are_mutually_exclusive_names() {
    assert_eq!(Theme::Dark.class(), "dark-theme");
    assert_eq!(Theme::Light.class(), "light-theme");
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
}

#[test]
fn default_policy_is_strict() {
    assert_eq!(ApplyPolicy::default(), ApplyPolicy::StrictToggle);
}
