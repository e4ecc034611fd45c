/// Segment classification for file-system style route patterns
///
/// A pattern such as `/products/[productID]/reviews/[reviewID]` is split on `/`
/// and every piece is classified into a [`SegmentKind`].

use crate::RouteTreeError;

/// Kind of a single route pattern segment
///
/// # Examples
///
/// ```
/// use approute_router::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("docs").unwrap(), SegmentKind::Static("docs".into()));
/// assert_eq!(classify_segment("[id]").unwrap(), SegmentKind::Dynamic("id".into()));
/// assert_eq!(classify_segment("[...slug]").unwrap(), SegmentKind::CatchAll("slug".into()));
/// assert_eq!(
///     classify_segment("[[...slug]]").unwrap(),
///     SegmentKind::OptionalCatchAll("slug".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Literal text, matched by equality
    Static(String),
    /// `[name]`: exactly one path component
    Dynamic(String),
    /// `[...name]`: one or more trailing components
    CatchAll(String),
    /// `[[...name]]`: zero or more trailing components
    OptionalCatchAll(String),
}

impl SegmentKind {
    /// Parameter name bound by this segment, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            SegmentKind::Static(_) => None,
            SegmentKind::Dynamic(name)
            | SegmentKind::CatchAll(name)
            | SegmentKind::OptionalCatchAll(name) => Some(name),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, SegmentKind::CatchAll(_) | SegmentKind::OptionalCatchAll(_))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, SegmentKind::Dynamic(_))
    }
}

/// Classifies one pattern segment
///
/// # Parsing Rules (evaluated in order)
///
/// 1. `[[...name]]` → optional catch-all
/// 2. `[...name]` → catch-all
/// 3. `[name]` → dynamic
/// 4. anything without brackets → static
///
/// Empty names, stray brackets and names containing brackets, dots or slashes
/// are rejected with [`RouteTreeError::MalformedSegment`].
pub fn classify_segment(segment: &str) -> Result<SegmentKind, RouteTreeError> {
    let malformed = || RouteTreeError::MalformedSegment(segment.to_string());

    if let Some(inner) = segment
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
    {
        let name = inner.strip_prefix("...").ok_or_else(malformed)?;
        return param_name(name)
            .map(SegmentKind::OptionalCatchAll)
            .ok_or_else(malformed);
    }

    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => match inner.strip_prefix("...") {
            Some(name) => param_name(name).map(SegmentKind::CatchAll),
            None => param_name(inner).map(SegmentKind::Dynamic),
        }
        .ok_or_else(malformed),
        None if segment.is_empty() || segment.contains(['[', ']', '/']) => Err(malformed()),
        None => Ok(SegmentKind::Static(segment.to_string())),
    }
}

fn param_name(name: &str) -> Option<String> {
    let valid = !name.is_empty() && !name.contains(['[', ']', '.', '/']);
    valid.then(|| name.to_string())
}
