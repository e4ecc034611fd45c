/// Errors raised while building a [`RouteTree`](crate::RouteTree)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTreeError {
    #[error("malformed route segment `{0}`")]
    MalformedSegment(String),

    #[error("route `{0}` is already registered")]
    Duplicate(String),

    #[error("`{pattern}`: catch-all `{catch_all}` must be the last segment")]
    CatchAllNotLast { pattern: String, catch_all: String },

    #[error("`{pattern}`: `{segment}` conflicts with catch-all sibling `{existing}`")]
    ConflictingCatchAll {
        pattern: String,
        segment: String,
        existing: String,
    },

    #[error("`{pattern}`: `{segment}` conflicts with dynamic sibling `{existing}`")]
    ConflictingDynamic {
        pattern: String,
        segment: String,
        existing: String,
    },
}
