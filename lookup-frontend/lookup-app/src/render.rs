//! Attribute values for result links built from endpoint data.
//!
//! Leptos escapes text and attribute values itself, these filters only
//! keep an attribute from meaning more than it should.

const BLOCKED_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// Browsers drop whitespace and control characters inside a scheme, so
/// `java\tscript:` has to be caught as well.
fn url_scheme(url: &str) -> Option<String> {
    let compact = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>();
    let end = compact.find([':', '/', '?', '#'])?;
    compact[end..]
        .starts_with(':')
        .then(|| compact[..end].to_ascii_lowercase())
}

/// Script capable urls are replaced by `#`.
pub fn safe_href(url: &str) -> String {
    match url_scheme(url) {
        Some(scheme) if BLOCKED_SCHEMES.contains(&scheme.as_str()) => "#".to_string(),
        _ => url.to_string(),
    }
}

/// Keeps a result type usable as a single class name.
pub fn icon_class(result_type: &str) -> String {
    let suffix = result_type
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>();
    format!("icon-type icon-type-{suffix}")
}
