//! Static route table.
//!
//! The table is the wire contract with the rendering layer: two entries,
//! fixed at startup, never mutated. [`resolve`] is the pure matcher behind
//! the live `leptos_router` declarations in `app.rs`, kept in sync with
//! them so link builders and tests share one source of truth.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Symbolic route identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Contents,
    Document,
}

/// One declarative routing rule.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: RouteName,
}

/// The full route table, in match order.
pub const ROUTES: [RouteEntry; 2] = [
    RouteEntry {
        path: "/",
        name: RouteName::Contents,
    },
    RouteEntry {
        path: "/documents/:uuid",
        name: RouteName::Document,
    },
];

/// A matched route with its extracted parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub name: RouteName,
    /// Document id from the `:uuid` segment; `None` for the contents route.
    pub uuid: Option<&'a str>,
}

/// Match `path` against the route table.
///
/// `/` resolves to the contents route; `/documents/{id}` (one non-empty
/// trailing segment) resolves to the document route with the id borrowed
/// from the path. Anything else returns `None` and is rendered by the
/// router's not-found fallback.
pub fn resolve(path: &str) -> Option<ResolvedRoute<'_>> {
    if path == "/" {
        return Some(ResolvedRoute {
            name: RouteName::Contents,
            uuid: None,
        });
    }
    let uuid = path.strip_prefix("/documents/")?;
    if uuid.is_empty() || uuid.contains('/') {
        return None;
    }
    Some(ResolvedRoute {
        name: RouteName::Document,
        uuid: Some(uuid),
    })
}

/// Canonical href for the document viewer route.
pub fn document_href(uuid: &str) -> String {
    format!("/documents/{uuid}")
}
