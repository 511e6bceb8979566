use crate::config::Config;
use crate::layout::PageGeometry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Page size and margins every document is laid out on.
    pub page_geometry: PageGeometry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let page_geometry = PageGeometry::a4_with_margin(config.page_margin_mm);
        AppState {
            config,
            page_geometry,
        }
    }
}
