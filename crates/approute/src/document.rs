use crate::metadata::ResolvedMetadata;
use maud::{html, Markup, DOCTYPE};

/// Final output of a request: resolved metadata plus the composed body
#[derive(Debug, Clone)]
pub struct Document {
    pub metadata: ResolvedMetadata,
    pub body: Markup,
}

impl Document {
    pub fn new(metadata: ResolvedMetadata, body: Markup) -> Self {
        Self { metadata, body }
    }

    /// Body markup without the surrounding document shell
    pub fn body_html(&self) -> &str {
        &self.body.0
    }

    /// Renders a full HTML document with the metadata in `<head>`
    pub fn to_markup(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    @if let Some(title) = &self.metadata.document_title {
                        title { (title) }
                    }
                    @if let Some(description) = &self.metadata.description {
                        meta name="description" content=(description);
                    }
                }
                body {
                    (self.body)
                }
            }
        }
    }

    pub fn into_html(self) -> String {
        self.to_markup().into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_carries_metadata() {
        let metadata = ResolvedMetadata {
            title: Some("Product 42".into()),
            document_title: Some("Product 42 | Bug Finderr".into()),
            description: Some("This is the product 42".into()),
        };
        let html = Document::new(metadata, html! { h1 { "Details about Product 42" } }).into_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Product 42 | Bug Finderr</title>"));
        assert!(html.contains(r#"<meta name="description" content="This is the product 42">"#));
        assert!(html.contains("<body><h1>Details about Product 42</h1></body>"));
    }

    #[test]
    fn test_missing_metadata_omits_tags() {
        let html = Document::new(ResolvedMetadata::default(), html! { p { "x" } }).into_html();

        assert!(!html.contains("<title>"));
        assert!(!html.contains(r#"name="description""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let metadata = ResolvedMetadata {
            document_title: Some("<script>".into()),
            ..Default::default()
        };
        let html = Document::new(metadata, html! {}).into_html();

        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn test_body_html_is_unwrapped() {
        let doc = Document::new(ResolvedMetadata::default(), html! { h1 { "Docs Home Page" } });
        assert_eq!(doc.body_html(), "<h1>Docs Home Page</h1>");
    }
}
