// File: src/metadata.rs
// Purpose: Per-segment document metadata and its root-to-leaf resolution

use approute_router::Params;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Async metadata generator, called with the request's params
pub type MetadataFn = Arc<dyn Fn(&Params) -> BoxFuture<'static, Metadata> + Send + Sync>;

/// Title declared by a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Title {
    /// Used as-is, then substituted into the nearest ancestor template
    Plain(String),
    /// `default` titles this segment; `template` wraps descendant titles at `%s`
    Template { default: String, template: String },
}

/// Metadata declared by one segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: Option<Title>,
    pub description: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Title::Plain(title.into()));
        self
    }

    pub fn title_template(mut self, default: impl Into<String>, template: impl Into<String>) -> Self {
        self.title = Some(Title::Template {
            default: default.into(),
            template: template.into(),
        });
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Where a segment's metadata comes from
#[derive(Clone)]
pub enum MetadataSource {
    Static(Metadata),
    Generated(MetadataFn),
}

impl MetadataSource {
    /// Wraps an async function of the params
    pub fn generated<F, Fut>(generate: F) -> Self
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Metadata> + Send + 'static,
    {
        let generate: MetadataFn =
            Arc::new(move |params: &Params| -> BoxFuture<'static, Metadata> {
                Box::pin(generate(params.clone()))
            });
        MetadataSource::Generated(generate)
    }

    pub async fn resolve(&self, params: &Params) -> Metadata {
        match self {
            MetadataSource::Static(metadata) => metadata.clone(),
            MetadataSource::Generated(generate) => generate(params).await,
        }
    }
}

impl fmt::Debug for MetadataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataSource::Static(metadata) => f.debug_tuple("Static").field(metadata).finish(),
            MetadataSource::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

/// Metadata after merging every segment of a match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    /// Nearest declared title, before any template is applied
    pub title: Option<String>,
    /// Text of the document's `<title>`
    pub document_title: Option<String>,
    pub description: Option<String>,
}

impl ResolvedMetadata {
    /// Folds one segment's metadata into the result
    ///
    /// `template` carries the nearest ancestor template and is replaced when
    /// this segment declares one of its own.
    fn apply(&mut self, metadata: Metadata, template: &mut Option<String>) {
        match metadata.title {
            Some(Title::Plain(title)) => {
                self.document_title = Some(match template.as_deref() {
                    Some(template) => template.replacen("%s", &title, 1),
                    None => title.clone(),
                });
                self.title = Some(title);
            }
            Some(Title::Template {
                default,
                template: own,
            }) => {
                self.document_title = Some(default.clone());
                self.title = Some(default);
                *template = Some(own);
            }
            None => {}
        }

        if let Some(description) = metadata.description {
            self.description = Some(description);
        }
    }
}

/// Resolves metadata sources in order, outermost first
///
/// Each source is awaited before the next one starts, so a descendant always
/// sees the template its ancestors left behind.
pub async fn resolve_metadata(sources: &[&MetadataSource], params: &Params) -> ResolvedMetadata {
    let mut resolved = ResolvedMetadata::default();
    let mut template = None;

    for source in sources {
        let metadata = source.resolve(params).await;
        resolved.apply(metadata, &mut template);
    }

    resolved
}
