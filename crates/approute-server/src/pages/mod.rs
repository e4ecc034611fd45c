// File: src/pages/mod.rs
// Purpose: Route table of the demo application

mod docs;
mod products;
mod reviews;
mod root;

use approute::{RouteTreeError, Routes};

/// Builds the application's route table
///
/// Each entry mirrors a directory of a file-system router: the pattern is
/// the directory path and the segment carries what that directory declares.
pub fn routes() -> Result<Routes, RouteTreeError> {
    Routes::new()
        .with_route("/", root::segment())?
        .with_route("/docs/[[...slug]]", docs::segment())?
        .with_route("/products/[productID]", products::segment())?
        .with_route("/products/[productID]/reviews/[reviewID]", reviews::segment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_builds() {
        let routes = routes().unwrap();
        assert_eq!(
            routes.patterns(),
            vec![
                "/docs/[[...slug]]",
                "/products/[productID]",
                "/products/[productID]/reviews/[reviewID]",
            ]
        );
    }
}
