// Layout engine: turns a content-block sequence into positioned, paginated output.
// Pure and CPU-bound; callers on the async runtime go through tokio::task::spawn_blocking.

pub mod blocks;
pub mod font_metrics;
pub mod paginate;
pub mod wrap;

// Re-export the public API consumed by the composer, renderer and handlers.
pub use blocks::ContentBlock;
pub use font_metrics::{FontFace, PageGeometry, DEFAULT_MARGIN_MM};
pub use paginate::{lay_out, LaidOutDocument, PageItem};
