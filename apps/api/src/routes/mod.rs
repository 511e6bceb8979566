pub mod health;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::Uri,
    routing::{get, post},
    Json, Router,
};

use serde_json::{Map, Value};

use crate::documents::handlers::handle_generate;
use crate::documents::spec::DocumentType;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    let mut router: Router<AppState> =
        Router::new().route("/health", get(health::health_handler));

    // One POST route per document type, all served by the same handler.
    for doc_type in DocumentType::ALL {
        router = router.route(
            doc_type.template().route,
            post(
                move |state: State<AppState>, body: Json<Map<String, Value>>| {
                    handle_generate(doc_type, state, body)
                },
            ),
        );
    }

    router
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use lopdf::Document;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn full_request() -> serde_json::Value {
        json!({
            "outorganteNome": "Maria Souza",
            "outorganteNacionalidade": "brasileira",
            "outorganteCpf": "123.456.789-00",
            "outorganteEndereco": "Rua A, 123, CEP 12345-678",
            "outorganteRazaoSocial": "Revenda Sul Ltda",
            "outorganteCnpj": "12.345.678/0001-90",
            "outorgadoNome": "João Lima",
            "outorgadoNacionalidade": "brasileiro",
            "outorgadoCpf": "987.654.321-00",
            "outorgadoEndereco": "Av. B, 45",
            "outorgados": [
                {"nome": "João Lima", "nacionalidade": "brasileiro", "cpf": "1", "endereco": "Rua C"},
                {"nome": "Paula Reis", "nacionalidade": "brasileira", "cpf": "2", "endereco": "Rua D"}
            ],
            "veiculoNome": "VW Gol",
            "veiculoMarcaModelo": "VW/GOL 1.0",
            "veiculoPlaca": "IXY4G56",
            "veiculoRenavam": 1234567890,
            "veiculoChassi": "9BWZZZ377VT004251",
            "veiculoAnoModelo": "2019/2020",
            "veiculoCor": "branca",
            "localEmissao": "Porto Alegre",
            "dataEmissao": "2024-03-05"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["documents"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_every_endpoint_returns_pdf_attachment() {
        for doc_type in DocumentType::ALL {
            let template = doc_type.template();
            let response = app()
                .oneshot(post_json(template.route, full_request()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", template.route);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/pdf"
            );
            assert_eq!(
                response.headers()[header::CONTENT_DISPOSITION],
                format!("attachment; filename=\"{}\"", template.filename).as_str()
            );

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let doc = Document::load_mem(&bytes).unwrap();
            assert!(!doc.get_pages().is_empty());
        }
    }

    #[tokio::test]
    async fn test_empty_object_still_generates() {
        let response = app()
            .oneshot(post_json("/generate_procuracao_pj_multiplos", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_long_clause_paginates() {
        let mut body = full_request();
        body["poderes"] = json!("praticar todos os atos necessários perante o DETRAN, ".repeat(200));
        let response = app()
            .oneshot(post_json("/generate_procuracao_pf", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/generate_representacao_pf")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_non_object_body_is_rejected() {
        let response = app()
            .oneshot(post_json("/generate_substabelecimento_pj", json!([1, 2, 3])))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let state = AppState::new(Config {
            max_body_bytes: 128,
            ..Config::default()
        });
        let mut body = full_request();
        body["poderes"] = json!("x".repeat(1024));
        let response = build_router(state)
            .oneshot(post_json("/generate_procuracao_pj", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_malformed_grantee_list_is_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/generate_procuracao_pf_multiplos",
                json!({"outorgados": [1, 2]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = app()
            .oneshot(post_json("/generate_contrato", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
