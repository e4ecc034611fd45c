/// Path utilities for validation, normalization and splitting
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use approute_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/products/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("docs"));
/// assert!(!is_valid_path("/docs/"));
/// assert!(!is_valid_path("/docs//hooks"));
/// assert!(!is_valid_path("/docs\\hooks"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/docs/` → `/docs`
/// - Double slashes: `/docs//hooks` → `/docs/hooks`
/// - Backslashes: `\docs\hooks` → `/docs/hooks`
///
/// # Examples
///
/// ```
/// use approute_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/docs"), Cow::Borrowed("/docs")));
/// assert_eq!(normalize_path("/docs/"), "/docs");
/// assert_eq!(normalize_path("\\products\\42"), "/products/42");
/// assert_eq!(normalize_path("/products//42///reviews"), "/products/42/reviews");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a request path into decoded segments
///
/// The path is normalized first, so `/` and `""` both yield no segments.
/// Each segment is percent-decoded; a segment that does not decode to valid
/// UTF-8 is kept as written.
///
/// # Examples
///
/// ```
/// use approute_router::path::split_path;
///
/// assert_eq!(split_path("/products/42/reviews/7"), vec!["products", "42", "reviews", "7"]);
/// assert_eq!(split_path("/docs/hello%20world/"), vec!["docs", "hello world"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    normalize_path(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect()
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}
