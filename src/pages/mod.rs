//! Page routing for the documentation site.
//!
//! Maps the front controller's query value onto a fixed set of static
//! documents. Unrecognized values redirect to the site root; routing never
//! fails.

use std::fmt;

/// Document served when no page is requested.
pub const DEFAULT_DOCUMENT: &str = "en.html";

/// Outcome of resolving a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Serve a static document.
    Serve(&'static str),
    /// Redirect to the site root.
    RedirectToRoot,
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageAction::Serve(document) => write!(f, "serve {}", document),
            PageAction::RedirectToRoot => write!(f, "redirect /"),
        }
    }
}

/// Resolve a page query value to the document to serve.
///
/// An absent or empty value serves the default document; any other
/// unrecognized value redirects to the site root.
pub fn resolve(query: Option<&str>) -> PageAction {
    match query {
        Some("ru") => PageAction::Serve("ru.html"),
        Some("en") => PageAction::Serve("en.html"),
        Some("bibles") => PageAction::Serve("bibles.html"),
        Some(other) if !other.is_empty() => PageAction::RedirectToRoot,
        _ => PageAction::Serve(DEFAULT_DOCUMENT),
    }
}
