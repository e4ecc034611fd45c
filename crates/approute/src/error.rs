use maud::Markup;
use serde::Serialize;
use std::fmt;

/// Stage of a request
///
/// Every phase appears in the renderer's logs. A [`NotFound`] only ever
/// carries `Matching` or `Rendering`: metadata resolution cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Matching,
    /// Log-only; never recorded on a [`NotFound`]
    MetadataResolving,
    Rendering,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Matching => "matching",
            Phase::MetadataResolving => "resolving metadata",
            Phase::Rendering => "rendering",
        })
    }
}

/// Terminal not-found outcome of a request
///
/// Raised by the matcher when no route accepts the path, or by a page that
/// rejects its params. It is never recovered from; hosts map it to a 404.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{path}` not found while {phase}")]
pub struct NotFound {
    pub path: String,
    pub phase: Phase,
}

impl NotFound {
    pub fn new(path: impl Into<String>, phase: Phase) -> Self {
        Self {
            path: path.into(),
            phase,
        }
    }
}

/// Signal returned by a page that should render as not found
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page signalled not found")]
pub struct PageNotFound;

/// What a page produces
pub type PageResult = Result<Markup, PageNotFound>;

/// Aborts the current page with a not-found outcome
///
/// ```
/// use approute::{not_found, Params, PageResult};
///
/// fn page(params: &Params) -> PageResult {
///     match params.one("id") {
///         Some(id) => Ok(approute::html! { h1 { "Item " (id) } }),
///         None => not_found(),
///     }
/// }
///
/// assert!(page(&Params::new()).is_err());
/// ```
pub fn not_found() -> PageResult {
    Err(PageNotFound)
}
