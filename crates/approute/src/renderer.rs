use crate::config::RoutingConfig;
use crate::document::Document;
use crate::error::{NotFound, Phase};
use crate::layout::compose_layouts;
use crate::metadata::{resolve_metadata, MetadataSource};
use crate::segment::{Routes, Segment};
use approute_router::{normalize_path, Params};
use maud::{html, Markup};
use tracing::{debug, info, warn};

/// Turns request paths into documents
///
/// Every request runs `Matching → MetadataResolving → Rendering` and ends
/// either with a [`Document`] or with [`NotFound`].
pub struct Renderer {
    routes: Routes,
    base_path: Option<String>,
}

impl Renderer {
    pub fn new(routes: Routes) -> Self {
        Self {
            routes,
            base_path: None,
        }
    }

    /// Applies the routing section of the configuration
    pub fn from_config(mut routes: Routes, config: &RoutingConfig) -> Self {
        routes.set_case_insensitive(config.case_insensitive);
        let renderer = Self::new(routes);
        match &config.base_path {
            Some(base) => renderer.with_base_path(base),
            None => renderer,
        }
    }

    /// Serves every route below `base` (e.g. `/app`)
    pub fn with_base_path(mut self, base: impl AsRef<str>) -> Self {
        let base = normalize_path(base.as_ref());
        self.base_path = (base != "/").then(|| base.into_owned());
        self
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Renders the document for `path`
    pub async fn render(&self, path: &str) -> Result<Document, NotFound> {
        debug!(path, phase = %Phase::Matching, "matching route");
        let matched = self
            .strip_base_path(path)
            .and_then(|relative| self.routes.match_path(relative))
            .ok_or_else(|| {
                warn!(path, phase = %Phase::Matching, "no route matches");
                NotFound::new(path, Phase::Matching)
            })?;

        let pattern = matched.pattern();
        let params = matched.params();
        let segments: Vec<&Segment> = matched.data().collect();

        debug!(path, pattern = %pattern, phase = %Phase::MetadataResolving, "resolving metadata");
        // Page metadata belongs to the leaf alone; ancestors contribute segment metadata
        let leaf_page_metadata = matched.leaf().data().and_then(Segment::page_metadata_source);
        let sources: Vec<&MetadataSource> = segments
            .iter()
            .filter_map(|segment| segment.metadata_source())
            .chain(leaf_page_metadata)
            .collect();
        let metadata = resolve_metadata(&sources, params).await;

        debug!(path, pattern = %pattern, phase = %Phase::Rendering, "rendering page");
        let page = matched
            .leaf()
            .data()
            .and_then(Segment::page_fn)
            .ok_or_else(|| NotFound::new(path, Phase::Rendering))?;
        let content = page(params).map_err(|_| {
            warn!(path, pattern = %pattern, phase = %Phase::Rendering, "page signalled not found");
            NotFound::new(path, Phase::Rendering)
        })?;

        let body = compose_layouts(segments.iter().filter_map(|s| s.layout_fn()), content);
        info!(path, pattern = %pattern, "rendered");

        Ok(Document::new(metadata, body))
    }

    /// Document shown for a [`NotFound`] outcome
    ///
    /// Uses the root segment's layout and metadata around a fixed message.
    pub async fn render_not_found(&self) -> Document {
        let root = self.routes.root().data();
        let mut metadata = match root.and_then(Segment::metadata_source) {
            Some(source) => resolve_metadata(&[source], &Params::new()).await,
            None => Default::default(),
        };
        metadata.document_title = Some("404: This page could not be found.".to_string());

        let body = compose_layouts(root.and_then(Segment::layout_fn), not_found_body());
        Document::new(metadata, body)
    }

    fn strip_base_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        let Some(base) = &self.base_path else {
            return Some(path);
        };
        let rest = path.strip_prefix(base.as_str())?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}

fn not_found_body() -> Markup {
    html! {
        div {
            h1 { "404" }
            h2 { "This page could not be found." }
        }
    }
}
