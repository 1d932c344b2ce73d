mod briefs;
mod contact;
mod influencers;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use outreach_core::{HealthStatus, Influencer};
use serde::Serialize;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

/// Shared handler state: the in-memory roster. Nothing is persisted.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RwLock<Vec<Influencer>>>,
    pub default_limit: u32,
}

impl AppState {
    #[must_use]
    pub fn new(roster: Vec<Influencer>, default_limit: u32) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
            default_limit,
        }
    }
}

/// `{ "error": "..." }` with a status code.
#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            error: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/influencers", get(influencers::list_influencers))
        .route(
            "/api/influencers/search",
            post(influencers::search_influencers),
        )
        .route("/api/contact", post(contact::contact_influencer))
        .route("/api/briefs", post(briefs::create_brief))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use outreach_core::bundled_roster;
    use tower::ServiceExt;

    use super::*;

    fn test_state() -> AppState {
        AppState::new(bundled_roster().expect("roster"), 10)
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, json) = call(build_app(test_state()), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["message"], "API is running");
    }

    #[tokio::test]
    async fn health_echoes_request_id() {
        let request = Request::builder()
            .uri("/api/health")
            .header("x-request-id", "req-123")
            .body(Body::empty())
            .expect("request");
        let response = build_app(test_state())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(
            response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
            Some("req-123")
        );
    }

    #[tokio::test]
    async fn lists_full_roster() {
        let (status, json) = call(build_app(test_state()), get_request("/api/influencers")).await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().expect("array");
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["engagementRate"], "3.8%");
    }

    #[tokio::test]
    async fn search_filters_by_query_and_limit() {
        let app = build_app(test_state());
        let (status, json) = call(
            app,
            post_json(
                "/api/influencers/search",
                &serde_json::json!({ "query": "a", "limit": 2 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = json
            .as_array()
            .expect("array")
            .iter()
            .map(|row| row["name"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, ["Sarah Johnson", "Alex Chen"]);
    }

    #[tokio::test]
    async fn contact_marks_lead_contacted() {
        let state = test_state();
        let (status, json) = call(
            build_app(state.clone()),
            post_json(
                "/api/contact",
                &serde_json::json!({ "influencerId": 3, "message": "Hi Maria" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Contact request sent to influencer 3");

        let roster = state.roster.read().await;
        let maria = roster.iter().find(|i| i.id == 3).expect("maria");
        assert_eq!(maria.lead_stage.as_deref(), Some("contacted"));
    }

    #[tokio::test]
    async fn contact_unknown_influencer_is_not_found() {
        let (status, json) = call(
            build_app(test_state()),
            post_json(
                "/api/contact",
                &serde_json::json!({ "influencerId": 404, "message": "hello?" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "influencer 404 not found");
    }

    #[tokio::test]
    async fn create_brief_echoes_payload() {
        let payload = serde_json::json!({
            "id": 1_741_339_800_000_i64,
            "name": "Glow Labs",
            "type": "generated",
            "clientName": "Glow Labs",
            "productService": "Beauty",
            "targetAudience": "Gen Z",
            "campaignGoal": "Launch",
            "influencerType": "Skincare",
            "date": "3/7/2025"
        });
        let (status, json) = call(build_app(test_state()), post_json("/api/briefs", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, payload);
    }

    #[tokio::test]
    async fn create_brief_accepts_any_type() {
        let payload = serde_json::json!({ "type": "custom", "clientName": "Peak Outdoors" });
        let (status, json) = call(build_app(test_state()), post_json("/api/briefs", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["type"], "custom");
        assert_eq!(json["name"], "Peak Outdoors");
        assert_eq!(json["productService"], "");
    }
}
