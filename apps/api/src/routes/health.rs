use axum::Json;
use serde_json::{json, Value};

use crate::documents::spec::DocumentType;

/// GET /health
/// Returns a simple status object with service version and the documents served.
pub async fn health_handler() -> Json<Value> {
    let documents: Vec<&str> = DocumentType::ALL
        .iter()
        .map(|doc_type| doc_type.template().slug)
        .collect();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "procuracao-api",
        "documents": documents
    }))
}
