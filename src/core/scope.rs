//! Scope selector normalization.

/// Split a comma-separated scope selector into individual scopes.
///
/// Tolerates whitespace around entries and stray leading/trailing commas,
/// which show up in hand-edited themes. Empty entries are dropped.
pub fn split_scope_list(selector: &str) -> Vec<&str> {
    selector
        .trim()
        .trim_matches(',')
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether a scope is a descendant selector (`"meta.tag string"`).
pub fn is_descendant_selector(scope: &str) -> bool {
    scope.contains(' ')
}

/// Dot-separated segments of a scope, outermost first.
pub fn segments(scope: &str) -> impl Iterator<Item = &str> {
    scope.split('.')
}
