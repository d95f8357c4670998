//! Request selector validation and resolution.

use regex::Regex;

/// Path served when a client sends an empty or root selector.
pub const DEFAULT_PATH: &str = "/browse";

/// Check whether a selector is a well-formed base path: one or more
/// `/segment` parts of letters, digits and hyphens, with an optional
/// trailing slash.
pub fn is_valid_base_path(selector: &str) -> bool {
    let pattern = Regex::new(r"^(/[A-Za-z0-9-]+)+/?$").unwrap();
    pattern.is_match(selector)
}

/// Resolve a raw selector to the base path to fetch. Empty and root
/// selectors map to [`DEFAULT_PATH`]; anything else must be a valid base
/// path or the request is rejected before the pipeline runs.
pub fn resolve(selector: &str) -> Option<&str> {
    if selector.is_empty() || selector == "/" {
        return Some(DEFAULT_PATH);
    }
    if is_valid_base_path(selector) {
        Some(selector)
    } else {
        None
    }
}
