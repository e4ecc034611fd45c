//! # approute router
//!
//! A segment tree router using file-system style patterns:
//! - Static segments (`/docs`)
//! - Dynamic segments (`/products/[productID]`)
//! - Catch-all segments (`/blog/[...slug]`, one or more components)
//! - Optional catch-all segments (`/docs/[[...slug]]`, zero or more components)
//!
//! Every node of the tree may carry a payload `T`. A request may only end on a
//! node whose payload reports itself as a leaf through [`RouteData`]; the
//! payloads of all ancestors are handed back with the match so callers can
//! apply layouts and metadata from the outside in.
//!
//! ## Matching
//!
//! At each level the router prefers a static child, then the dynamic child,
//! then the catch-all child, and commits to the first one that accepts the
//! current component. It never backtracks into another sibling.
//!
//! ## Example
//!
//! ```
//! use approute_router::{RouteData, RouteTree};
//!
//! struct Page;
//! impl RouteData for Page {
//!     fn is_leaf(&self) -> bool { true }
//! }
//!
//! let mut tree = RouteTree::new();
//! tree.insert("/products/[productID]", Page).unwrap();
//! tree.insert("/docs/[[...slug]]", Page).unwrap();
//!
//! let m = tree.match_path("/products/42").unwrap();
//! assert_eq!(m.params().one("productID"), Some("42"));
//!
//! let m = tree.match_path("/docs").unwrap();
//! assert_eq!(m.params().many("slug"), Some(&[][..]));
//! ```

mod error;
mod params;
pub mod path;
mod segment;

pub use error::RouteTreeError;
pub use params::{ParamValue, Params};
pub use path::{is_valid_path, normalize_path, split_path};
pub use segment::{classify_segment, SegmentKind};

// ============================================================================
// Core Types
// ============================================================================

/// Payload stored on a route node
pub trait RouteData {
    /// Whether a request may end on this node
    fn is_leaf(&self) -> bool;
}

/// A node of the route tree
#[derive(Debug, Clone)]
pub struct RouteNode<T> {
    /// Segment as written in the pattern, e.g. `[productID]`
    segment: String,
    kind: SegmentKind,
    children: Vec<RouteNode<T>>,
    data: Option<T>,
}

impl<T> RouteNode<T> {
    fn new(segment: &str, kind: SegmentKind) -> Self {
        Self {
            segment: segment.to_string(),
            kind,
            children: Vec::new(),
            data: None,
        }
    }

    fn root() -> Self {
        Self::new("", SegmentKind::Static(String::new()))
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn children(&self) -> &[RouteNode<T>] {
        &self.children
    }

    fn matches_static(&self, component: &str, case_insensitive: bool) -> bool {
        match &self.kind {
            SegmentKind::Static(name) if case_insensitive => name.eq_ignore_ascii_case(component),
            SegmentKind::Static(name) => name == component,
            _ => false,
        }
    }

    /// Returns the child for `kind`, creating it when the sibling group allows it
    fn child_for(
        &mut self,
        segment: &str,
        kind: SegmentKind,
        pattern: &str,
    ) -> Result<&mut RouteNode<T>, RouteTreeError> {
        if let Some(idx) = self.children.iter().position(|c| c.kind == kind) {
            return Ok(&mut self.children[idx]);
        }

        if kind.is_catch_all() {
            if let Some(existing) = self.children.iter().find(|c| c.kind.is_catch_all()) {
                return Err(RouteTreeError::ConflictingCatchAll {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                    existing: existing.segment.clone(),
                });
            }
        }

        if kind.is_dynamic() {
            if let Some(existing) = self.children.iter().find(|c| c.kind.is_dynamic()) {
                return Err(RouteTreeError::ConflictingDynamic {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                    existing: existing.segment.clone(),
                });
            }
        }

        self.children.push(RouteNode::new(segment, kind));
        let idx = self.children.len() - 1;
        Ok(&mut self.children[idx])
    }
}

impl<T: RouteData> RouteNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.data.as_ref().is_some_and(T::is_leaf)
    }
}

/// Result of matching a path against a [`RouteTree`]
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    chain: Vec<&'a RouteNode<T>>,
    leaf: &'a RouteNode<T>,
    params: Params,
}

impl<'a, T> RouteMatch<'a, T> {
    /// Matched nodes from the root to the leaf, inclusive
    pub fn chain(&self) -> &[&'a RouteNode<T>] {
        &self.chain
    }

    /// Payloads along the chain, outermost first; nodes without one are skipped
    pub fn data(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.chain.iter().filter_map(|&node| node.data.as_ref())
    }

    pub fn leaf(&self) -> &'a RouteNode<T> {
        self.leaf
    }

    /// Pattern of the matched leaf, e.g. `/products/[productID]`
    pub fn pattern(&self) -> String {
        let joined = self
            .chain
            .iter()
            .map(|node| node.segment.as_str())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        format!("/{}", joined)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}

// ============================================================================
// Route Tree
// ============================================================================

/// Tree of route segments, built once and matched many times
#[derive(Debug, Clone)]
pub struct RouteTree<T> {
    root: RouteNode<T>,
    case_insensitive: bool,
}

impl<T> RouteTree<T> {
    /// Creates an empty, case-sensitive tree
    pub fn new() -> Self {
        Self {
            root: RouteNode::root(),
            case_insensitive: false,
        }
    }

    /// Creates an empty tree with the given static-segment case handling
    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            root: RouteNode::root(),
            case_insensitive,
        }
    }

    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn root(&self) -> &RouteNode<T> {
        &self.root
    }

    /// Registers `data` on the node described by `pattern`
    ///
    /// Intermediate nodes are created as needed and carry no payload until a
    /// pattern names them directly.
    ///
    /// # Errors
    ///
    /// - a malformed segment
    /// - a catch-all that is not the last segment
    /// - a second catch-all or a second, differently named dynamic segment
    ///   in one sibling group
    /// - a pattern registered twice
    pub fn insert(&mut self, pattern: &str, data: T) -> Result<(), RouteTreeError> {
        let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let kinds = parts
            .iter()
            .map(|part| classify_segment(part))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(pos) = kinds.iter().position(SegmentKind::is_catch_all) {
            if pos + 1 != kinds.len() {
                return Err(RouteTreeError::CatchAllNotLast {
                    pattern: pattern.to_string(),
                    catch_all: parts[pos].to_string(),
                });
            }
        }

        let node = parts
            .iter()
            .zip(kinds)
            .try_fold(&mut self.root, |node, (part, kind)| {
                node.child_for(part, kind, pattern)
            })?;

        if node.data.is_some() {
            return Err(RouteTreeError::Duplicate(pattern.to_string()));
        }
        node.data = Some(data);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_route(mut self, pattern: &str, data: T) -> Result<Self, RouteTreeError> {
        self.insert(pattern, data)?;
        Ok(self)
    }

    /// Payload registered for exactly `pattern`, without any matching
    pub fn get(&self, pattern: &str) -> Option<&T> {
        pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .try_fold(&self.root, |node, part| {
                node.children.iter().find(|c| c.segment == part)
            })?
            .data
            .as_ref()
    }
}

impl<T: RouteData> RouteTree<T> {
    /// Lists the pattern of every node a request can end on
    pub fn patterns(&self) -> Vec<String> {
        fn collect<T: RouteData>(node: &RouteNode<T>, prefix: &str, out: &mut Vec<String>) {
            let here = if node.segment.is_empty() {
                prefix.to_string()
            } else {
                format!("{}/{}", prefix, node.segment)
            };
            if node.is_leaf() {
                out.push(if here.is_empty() { "/".to_string() } else { here.clone() });
            }
            for child in &node.children {
                collect(child, &here, out);
            }
        }

        let mut out = Vec::new();
        collect(&self.root, "", &mut out);
        out
    }

    /// Matches a raw request path
    ///
    /// The path is normalized and percent-decoded before matching.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        self.match_segments(&split_path(path))
    }

    /// Matches an already split path
    pub fn match_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<RouteMatch<'_, T>> {
        let mut chain = Vec::new();
        let mut params = Params::new();
        let leaf = walk(&self.root, segments, self.case_insensitive, &mut chain, &mut params)?;
        Some(RouteMatch {
            chain,
            leaf,
            params,
        })
    }
}

impl<T> Default for RouteTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Matching
// ============================================================================

fn walk<'a, T: RouteData, S: AsRef<str>>(
    node: &'a RouteNode<T>,
    rest: &[S],
    case_insensitive: bool,
    chain: &mut Vec<&'a RouteNode<T>>,
    params: &mut Params,
) -> Option<&'a RouteNode<T>> {
    chain.push(node);

    let Some((head, tail)) = rest.split_first() else {
        if node.is_leaf() {
            return Some(node);
        }
        // A path ending above an optional catch-all binds it to nothing
        let catch_all = node
            .children
            .iter()
            .find(|c| matches!(c.kind, SegmentKind::OptionalCatchAll(_)))?;
        return accept_catch_all(catch_all, rest, chain, params);
    };
    let head = head.as_ref();

    if let Some(child) = node
        .children
        .iter()
        .find(|c| c.matches_static(head, case_insensitive))
    {
        return walk(child, tail, case_insensitive, chain, params);
    }

    let dynamic = node.children.iter().find_map(|c| match &c.kind {
        SegmentKind::Dynamic(name) => Some((c, name)),
        _ => None,
    });
    if let Some((child, name)) = dynamic {
        params.insert(name, ParamValue::One(head.to_string()));
        return walk(child, tail, case_insensitive, chain, params);
    }

    let catch_all = node.children.iter().find(|c| c.kind.is_catch_all())?;
    accept_catch_all(catch_all, rest, chain, params)
}

fn accept_catch_all<'a, T: RouteData, S: AsRef<str>>(
    node: &'a RouteNode<T>,
    rest: &[S],
    chain: &mut Vec<&'a RouteNode<T>>,
    params: &mut Params,
) -> Option<&'a RouteNode<T>> {
    if matches!(node.kind, SegmentKind::CatchAll(_)) && rest.is_empty() {
        return None;
    }

    let name = node.kind.param_name()?;
    let captured = rest.iter().map(|s| s.as_ref().to_string()).collect();
    params.insert(name, ParamValue::Many(captured));
    chain.push(node);

    node.is_leaf().then_some(node)
}
