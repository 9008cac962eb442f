//! Locale prefix canonicalization.

/// Canonical form of a locale prefix: one leading and one trailing `/`.
///
/// ```
/// use polydoc_site::canonicalize_prefix;
///
/// assert_eq!(canonicalize_prefix("/en"), "/en/");
/// assert_eq!(canonicalize_prefix("zh/"), "/zh/");
/// assert_eq!(canonicalize_prefix(""), "/");
/// ```
#[must_use]
pub fn canonicalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}
