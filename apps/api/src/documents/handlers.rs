use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::documents::models::DocumentRequest;
use crate::documents::spec::DocumentType;
use crate::errors::AppError;
use crate::render::render_document;
use crate::state::AppState;

/// POST /generate_{slug}
///
/// Shared by every document endpoint; the router binds `doc_type` per route.
/// The body must be a JSON object.
pub async fn handle_generate(
    doc_type: DocumentType,
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Response, AppError> {
    let template = doc_type.template();
    let spec = DocumentRequest::from_object(body)
        .map_err(|e| AppError::Validation(e.to_string()))?
        .into_spec(doc_type);
    let geometry = state.page_geometry;

    // Layout and PDF serialization are CPU-bound.
    let rendered = tokio::task::spawn_blocking(move || render_document(&spec, &geometry))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    info!(
        document = template.slug,
        pages = rendered.page_count,
        bytes = rendered.pdf.len(),
        "Generated document"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", template.filename),
            ),
        ],
        rendered.pdf,
    )
        .into_response())
}
