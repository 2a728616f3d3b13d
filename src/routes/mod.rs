pub mod api;

pub use api::create_api_routes;

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::handlers::root;
use crate::state::AppState;

/// Build the full application router
pub fn create_app_routes(state: AppState, cors_origins: &[String]) -> Router {
    let app = Router::new()
        .route("/", get(root))
        // Mount API routes
        .nest("/api", create_api_routes(state))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    match cors_layer(cors_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{HealthProbe, ProbeError, QueryExecutor};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    enum FakeDb {
        Returns(i64),
        Fails(&'static str),
    }

    #[async_trait]
    impl QueryExecutor for FakeDb {
        async fn select_one(&self) -> Result<Option<i64>, ProbeError> {
            match self {
                FakeDb::Returns(v) => Ok(Some(*v)),
                FakeDb::Fails(msg) => Err(ProbeError::Failed(msg.to_string())),
            }
        }
    }

    fn app_with(db: Option<FakeDb>) -> Router {
        let executor = db.map(|db| Arc::new(db) as Arc<dyn QueryExecutor>);
        let state = AppState::new(HealthProbe::new(Duration::from_secs(1)), executor);
        create_app_routes(state, &[])
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let (status, body) = get_text(app_with(None), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "BookMyTime API is running!");
    }

    #[tokio::test]
    async fn healthy_database_returns_up() {
        let (status, body) = get_text(app_with(Some(FakeDb::Returns(1))), "/api/database/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "UP");
    }

    #[tokio::test]
    async fn wrong_value_returns_unexpected_result() {
        let (status, body) = get_text(app_with(Some(FakeDb::Returns(2))), "/api/database/health").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "UNEXPECTED_RESULT");
    }

    #[tokio::test]
    async fn failing_database_returns_down() {
        let app = app_with(Some(FakeDb::Fails("connection refused")));
        let (status, body) = get_text(app, "/api/database/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "DOWN: connection refused");
    }

    #[tokio::test]
    async fn missing_database_returns_down() {
        let (status, body) = get_text(app_with(None), "/api/database/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "DOWN: database not configured");
    }

    #[tokio::test]
    async fn liveness_ignores_database_state() {
        let app = app_with(Some(FakeDb::Fails("connection refused")));
        let (status, body) = get_text(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn ready_reports_json_status() {
        let app = app_with(Some(FakeDb::Fails("connection refused")));
        let (status, body) = get_text(app, "/api/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "DOWN");
        assert_eq!(json["message"], "connection refused");

        let (status, body) = get_text(app_with(Some(FakeDb::Returns(1))), "/api/ready").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "UP");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = get_text(app_with(None), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/api/database/health"));
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let state = AppState::new(HealthProbe::default(), None);
        let app = create_app_routes(state, &["http://localhost:5173".to_string()]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[test]
    fn no_cors_layer_without_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_none());
    }
}
