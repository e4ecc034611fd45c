// approute - file-system style app routing
// Nested layouts, async per-route metadata and Maud pages over a segment tree

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod renderer;
pub mod segment;

// Re-export framework types
pub use config::{Config, LoggingConfig, RoutingConfig, ServerConfig};
pub use document::Document;
pub use error::{not_found, NotFound, PageNotFound, PageResult, Phase};
pub use layout::{compose_layouts, LayoutFn};
pub use metadata::{resolve_metadata, Metadata, MetadataFn, MetadataSource, ResolvedMetadata, Title};
pub use renderer::Renderer;
pub use segment::{PageFn, Routes, Segment};

// Re-export router types
pub use approute_router::{ParamValue, Params, RouteTreeError};

// Re-export Maud for layouts and pages
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
