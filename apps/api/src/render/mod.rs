// Rendering pipeline: DocumentSpec → content blocks → laid-out pages → PDF bytes.
// Everything here is synchronous and CPU-bound; handlers run it via spawn_blocking.

pub mod pdf;

use thiserror::Error;

use crate::documents::composer::compose;
use crate::documents::spec::DocumentSpec;
use crate::layout::{lay_out, PageGeometry};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode page content: {0}")]
    Content(String),

    #[error("failed to serialize PDF: {0}")]
    Save(String),
}

/// Final output of one generation request.
#[derive(Debug)]
pub struct RenderedDocument {
    pub pdf: Vec<u8>,
    pub page_count: usize,
}

/// Composes, lays out and renders one document.
pub fn render_document(
    spec: &DocumentSpec,
    geometry: &PageGeometry,
) -> Result<RenderedDocument, RenderError> {
    let blocks = compose(spec);
    let layout = lay_out(&blocks, geometry);
    let pdf = pdf::render_pdf(&layout)?;
    Ok(RenderedDocument {
        pdf,
        page_count: layout.page_count(),
    })
}
