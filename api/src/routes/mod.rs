//! API route definitions

pub mod analyze;

use axum::{routing::post, Router};

/// Create all API routes
pub fn api_routes() -> Router {
    Router::new()
        // Keyword routes
        .route("/analyze", post(analyze::analyze_keyword))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::api_routes;

    fn app() -> Router {
        Router::new()
            .route("/health", get(crate::health_check))
            .nest("/api", api_routes())
    }

    async fn post_analyze(body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();

        (status, value)
    }

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let (status, body) = post_analyze(json!({ "keyword": "gift" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyword"], "gift");
        assert_eq!(body["search_volume"], 15_900);
        assert_eq!(body["difficulty"], 90);
        assert_eq!(body["estimated_earnings"], 39.75);
        assert_eq!(body["related_keywords"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_keyword() {
        let (status, body) = post_analyze(json!({ "keyword": "   " })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please provide a keyword");
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_keyword() {
        let (status, body) = post_analyze(json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
