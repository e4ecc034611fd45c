//! Integration tests for approute-router
//!
//! Organized by feature area:
//! - Static, dynamic and catch-all matching
//! - Precedence and the no-backtracking rule
//! - Tree construction errors
//! - Path handling (normalization, decoding, case)

use approute_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Layout(&'static str),
    Page(&'static str),
}

impl RouteData for Node {
    fn is_leaf(&self) -> bool {
        matches!(self, Node::Page(_))
    }
}

fn app_tree() -> RouteTree<Node> {
    RouteTree::new()
        .with_route("/", Node::Layout("root"))
        .and_then(|t| t.with_route("/docs/[[...slug]]", Node::Page("docs")))
        .and_then(|t| t.with_route("/products/[productID]", Node::Page("product")))
        .and_then(|t| {
            t.with_route(
                "/products/[productID]/reviews/[reviewID]",
                Node::Page("review"),
            )
        })
        .unwrap()
}

fn leaf_name(m: &RouteMatch<'_, Node>) -> &'static str {
    match m.leaf().data() {
        Some(Node::Page(name)) | Some(Node::Layout(name)) => *name,
        None => "",
    }
}

// ============================================================================
// Basic matching
// ============================================================================

#[test]
fn test_static_route() {
    let tree = RouteTree::new()
        .with_route("/about", Node::Page("about"))
        .unwrap();

    assert!(tree.match_path("/about").is_some());
    assert!(tree.match_path("/other").is_none());
    assert!(tree.match_path("/about/more").is_none());
}

#[test]
fn test_dynamic_segment_binds_one_component() {
    let tree = app_tree();
    let m = tree.match_path("/products/42").unwrap();

    assert_eq!(leaf_name(&m), "product");
    assert_eq!(m.params().one("productID"), Some("42"));
    assert_eq!(m.params().len(), 1);
    assert_eq!(m.pattern(), "/products/[productID]");
}

#[test]
fn test_nested_dynamic_segments() {
    let tree = app_tree();
    let m = tree.match_path("/products/42/reviews/7").unwrap();

    assert_eq!(leaf_name(&m), "review");
    assert_eq!(m.params().one("productID"), Some("42"));
    assert_eq!(m.params().one("reviewID"), Some("7"));
}

#[rstest]
#[case("/docs", &[])]
#[case("/docs/hooks", &["hooks"])]
#[case("/docs/hooks/useState", &["hooks", "useState"])]
#[case("/docs/a/b/c/d", &["a", "b", "c", "d"])]
fn test_optional_catch_all(#[case] path: &str, #[case] expected: &[&str]) {
    let tree = app_tree();
    let m = tree.match_path(path).unwrap();

    assert_eq!(leaf_name(&m), "docs");
    let slug: Vec<&str> = m
        .params()
        .many("slug")
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(slug, expected);
}

#[test]
fn test_required_catch_all_needs_a_component() {
    let tree = RouteTree::new()
        .with_route("/shop/[...slug]", Node::Page("shop"))
        .unwrap();

    assert!(tree.match_path("/shop").is_none());

    let m = tree.match_path("/shop/electronics/laptops").unwrap();
    assert_eq!(
        m.params().many("slug"),
        Some(&["electronics".to_string(), "laptops".to_string()][..])
    );
}

#[rstest]
#[case("/")]
#[case("/products")]
#[case("/products/42/reviews")]
#[case("/products/42/reviews/7/extra")]
#[case("/unknown")]
fn test_unmatched_paths(#[case] path: &str) {
    assert!(app_tree().match_path(path).is_none(), "{path} should not match");
}

#[test]
fn test_match_segments_accepts_split_input() {
    let tree = app_tree();
    let m = tree.match_segments(&["products", "42", "reviews", "7"]).unwrap();
    assert_eq!(leaf_name(&m), "review");

    let empty: [&str; 0] = [];
    assert!(tree.match_segments(&empty).is_none());
}

// ============================================================================
// Chain and payloads
// ============================================================================

#[test]
fn test_chain_runs_root_to_leaf() {
    let tree = app_tree();
    let m = tree.match_path("/products/42/reviews/7").unwrap();

    let segments: Vec<&str> = m.chain().iter().map(|n| n.segment()).collect();
    assert_eq!(segments, vec!["", "products", "[productID]", "reviews", "[reviewID]"]);

    let data: Vec<&Node> = m.data().collect();
    assert_eq!(
        data,
        vec![&Node::Layout("root"), &Node::Page("product"), &Node::Page("review")]
    );
}

#[test]
fn test_chain_includes_empty_catch_all() {
    let tree = app_tree();
    let m = tree.match_path("/docs").unwrap();

    let segments: Vec<&str> = m.chain().iter().map(|n| n.segment()).collect();
    assert_eq!(segments, vec!["", "docs", "[[...slug]]"]);
    assert_eq!(m.pattern(), "/docs/[[...slug]]");
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_static_beats_dynamic() {
    let tree = RouteTree::new()
        .with_route("/users/[id]", Node::Page("user"))
        .unwrap()
        .with_route("/users/new", Node::Page("new"))
        .unwrap();

    assert_eq!(leaf_name(&tree.match_path("/users/new").unwrap()), "new");
    assert_eq!(leaf_name(&tree.match_path("/users/123").unwrap()), "user");
}

#[test]
fn test_dynamic_beats_catch_all() {
    let tree = RouteTree::new()
        .with_route("/blog/[...slug]", Node::Page("catch"))
        .unwrap()
        .with_route("/blog/[post]", Node::Page("post"))
        .unwrap();

    assert_eq!(leaf_name(&tree.match_path("/blog/hello").unwrap()), "post");
}

#[test]
fn test_catch_all_after_no_dynamic_sibling() {
    let tree = RouteTree::new()
        .with_route("/blog/archive", Node::Page("archive"))
        .unwrap()
        .with_route("/blog/[...slug]", Node::Page("catch"))
        .unwrap();

    assert_eq!(leaf_name(&tree.match_path("/blog/archive").unwrap()), "archive");
    assert_eq!(leaf_name(&tree.match_path("/blog/2024/05").unwrap()), "catch");
}

#[test]
fn test_no_backtracking_after_static_commit() {
    // `/users/new/edit` commits to the static `new` child, which has no
    // `edit` child, so the dynamic sibling is never retried.
    let tree = RouteTree::new()
        .with_route("/users/new", Node::Page("new"))
        .unwrap()
        .with_route("/users/[id]/edit", Node::Page("edit"))
        .unwrap();

    assert!(tree.match_path("/users/42/edit").is_some());
    assert!(tree.match_path("/users/new/edit").is_none());
}

// ============================================================================
// Tree construction
// ============================================================================

#[test]
fn test_duplicate_route_is_rejected() {
    let mut tree = app_tree();
    let err = tree
        .insert("/products/[productID]", Node::Page("again"))
        .unwrap_err();
    assert_eq!(err, RouteTreeError::Duplicate("/products/[productID]".to_string()));
}

#[test]
fn test_catch_all_must_be_last() {
    let mut tree: RouteTree<Node> = RouteTree::new();
    let err = tree.insert("/docs/[...slug]/edit", Node::Page("x")).unwrap_err();
    assert!(matches!(err, RouteTreeError::CatchAllNotLast { .. }));
}

#[test]
fn test_one_catch_all_per_level() {
    let mut tree = app_tree();
    let err = tree.insert("/docs/[...rest]", Node::Page("x")).unwrap_err();
    assert_eq!(
        err,
        RouteTreeError::ConflictingCatchAll {
            pattern: "/docs/[...rest]".to_string(),
            segment: "[...rest]".to_string(),
            existing: "[[...slug]]".to_string(),
        }
    );
}

#[test]
fn test_differently_named_dynamic_siblings_conflict() {
    let mut tree = app_tree();
    let err = tree.insert("/products/[sku]", Node::Page("x")).unwrap_err();
    assert!(matches!(err, RouteTreeError::ConflictingDynamic { .. }));
}

#[test]
fn test_same_dynamic_segment_is_shared() {
    let mut tree = app_tree();
    tree.insert("/products/[productID]/specs", Node::Page("specs"))
        .unwrap();
    let m = tree.match_path("/products/9/specs").unwrap();
    assert_eq!(m.params().one("productID"), Some("9"));
}

#[test]
fn test_malformed_pattern_is_rejected() {
    let mut tree: RouteTree<Node> = RouteTree::new();
    assert!(matches!(
        tree.insert("/products/[]", Node::Page("x")),
        Err(RouteTreeError::MalformedSegment(_))
    ));
}

#[test]
fn test_patterns_lists_leaves_only() {
    assert_eq!(
        app_tree().patterns(),
        vec![
            "/docs/[[...slug]]",
            "/products/[productID]",
            "/products/[productID]/reviews/[reviewID]",
        ]
    );
}

// ============================================================================
// Path handling
// ============================================================================

#[test]
fn test_trailing_and_double_slashes() {
    let tree = app_tree();
    assert!(tree.match_path("/products/42/").is_some());
    assert!(tree.match_path("//products//42").is_some());
}

#[test]
fn test_components_are_percent_decoded() {
    let tree = app_tree();
    let m = tree.match_path("/docs/data%20fetching").unwrap();
    assert_eq!(m.params().many("slug"), Some(&["data fetching".to_string()][..]));
}

#[test]
fn test_case_sensitive_by_default() {
    let tree = app_tree();
    assert!(!tree.is_case_insensitive());
    assert!(tree.match_path("/Products/42").is_none());
}

#[test]
fn test_case_insensitive_static_segments() {
    let mut tree = app_tree();
    tree.set_case_insensitive(true);

    let m = tree.match_path("/PRODUCTS/AbC").unwrap();
    assert_eq!(m.params().one("productID"), Some("AbC"));
}
