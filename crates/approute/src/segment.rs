// File: src/segment.rs
// Purpose: What a route segment declares: layout, page and metadata

use crate::error::PageResult;
use crate::layout::LayoutFn;
use crate::metadata::{Metadata, MetadataSource};
use approute_router::{Params, RouteData, RouteTree};
use maud::Markup;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Page renderer of a leaf segment
pub type PageFn = Arc<dyn Fn(&Params) -> PageResult + Send + Sync>;

/// Route table of an application
pub type Routes = RouteTree<Segment>;

/// Handlers attached to one node of the route tree
///
/// Only segments with a page can end a request. The layout and the segment
/// metadata apply to every request passing through the segment; page
/// metadata applies only when this segment's own page renders.
///
/// ```
/// use approute::{html, Markup, Metadata, Routes, Segment};
///
/// let mut routes = Routes::new();
/// routes.insert("/", Segment::new()
///     .layout(|children: Markup| html! { main { (children) } })
///     .metadata(Metadata::new().title_template("Acme", "%s | Acme")))
///     .unwrap();
/// routes.insert("/about", Segment::new()
///     .page(|_params| Ok(html! { h1 { "About" } })))
///     .unwrap();
///
/// assert_eq!(routes.patterns(), vec!["/about"]);
/// ```
#[derive(Clone, Default)]
pub struct Segment {
    layout: Option<LayoutFn>,
    page: Option<PageFn>,
    metadata: Option<MetadataSource>,
    page_metadata: Option<MetadataSource>,
}

impl Segment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout<F>(mut self, layout: F) -> Self
    where
        F: Fn(Markup) -> Markup + Send + Sync + 'static,
    {
        self.layout = Some(Arc::new(layout));
        self
    }

    pub fn page<F>(mut self, page: F) -> Self
    where
        F: Fn(&Params) -> PageResult + Send + Sync + 'static,
    {
        self.page = Some(Arc::new(page));
        self
    }

    /// Declares fixed metadata for this segment and everything below it
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(MetadataSource::Static(metadata));
        self
    }

    /// Declares metadata computed from the params at request time, for this
    /// segment and everything below it
    pub fn generate_metadata<F, Fut>(mut self, generate: F) -> Self
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Metadata> + Send + 'static,
    {
        self.metadata = Some(MetadataSource::generated(generate));
        self
    }

    /// Declares fixed metadata used only when this segment's page renders
    pub fn page_metadata(mut self, metadata: Metadata) -> Self {
        self.page_metadata = Some(MetadataSource::Static(metadata));
        self
    }

    /// Like [`generate_metadata`](Self::generate_metadata), but only for
    /// requests that end on this segment's page
    pub fn generate_page_metadata<F, Fut>(mut self, generate: F) -> Self
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Metadata> + Send + 'static,
    {
        self.page_metadata = Some(MetadataSource::generated(generate));
        self
    }

    pub fn layout_fn(&self) -> Option<&LayoutFn> {
        self.layout.as_ref()
    }

    pub fn page_fn(&self) -> Option<&PageFn> {
        self.page.as_ref()
    }

    pub fn metadata_source(&self) -> Option<&MetadataSource> {
        self.metadata.as_ref()
    }

    pub fn page_metadata_source(&self) -> Option<&MetadataSource> {
        self.page_metadata.as_ref()
    }
}

impl RouteData for Segment {
    fn is_leaf(&self) -> bool {
        self.page.is_some()
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("layout", &self.layout.is_some())
            .field("page", &self.page.is_some())
            .field("metadata", &self.metadata)
            .field("page_metadata", &self.page_metadata)
            .finish()
    }
}
