//! HTTP transport implementation.
//!
//! Exposes the dispatcher over the fixed COP API surface. The routing layer
//! owns nothing but glue: it extracts identifiers and payloads, increments
//! the handshake counter, calls the dispatcher, and shapes errors into
//! `{ "detail": ... }` bodies with the matching status code.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::error::Error;
use crate::core::metrics::{EXPOSITION_CONTENT_TYPE, HandshakeMetrics};
use crate::core::Dispatcher;
use crate::domains::prompts::PromptError;
use crate::domains::resources::ResourceError;
use crate::domains::tools::{ToolError, ToolRequest};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The capability dispatcher.
    dispatcher: Dispatcher,

    /// Handshake call counter exposed on `/metrics`.
    metrics: Arc<HandshakeMetrics>,
}

impl AppState {
    /// Create the shared handler state.
    pub fn new(dispatcher: Dispatcher, metrics: Arc<HandshakeMetrics>) -> Self {
        Self {
            dispatcher,
            metrics,
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(
        self,
        dispatcher: Dispatcher,
        metrics: Arc<HandshakeMetrics>,
    ) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState::new(dispatcher, metrics);
        let mut app = build_router(state).layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {addr}");
        info!("  → Handshake: POST /mcp/handshake");
        info!("  → Metrics:   GET /metrics");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the COP API router.
///
/// Separated from [`HttpTransport::run`] so tests can drive the router
/// without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/mcp/handshake", post(handshake_handler))
        .route("/mcp/resource/{resource_id}", get(get_resource_handler))
        .route("/mcp/tool/{tool_id}", post(invoke_tool_handler))
        .route("/mcp/prompt/{prompt_id}", get(get_prompt_handler))
        .with_state(state)
}

/// Dispatch error shaped for the wire: status code plus `detail` body.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            Error::InvalidHandshake => {
                (StatusCode::BAD_REQUEST, "Invalid MCP handshake".to_string())
            }
            Error::Resource(ResourceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }
            Error::Tool(ToolError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Tool not found".to_string())
            }
            Error::Prompt(PromptError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Prompt not found".to_string())
            }
            Error::Tool(ToolError::InvalidArguments(msg)) => (StatusCode::BAD_REQUEST, msg),
            Error::Tool(ToolError::ExecutionFailed(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Tool execution failed: {msg}"),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Root handler - provides a welcome message.
async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to Zero2K8s: This is the COP API Endpoint"
    }))
}

/// Metrics endpoint in Prometheus text exposition format.
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        state.metrics.render(),
    )
}

/// Handle `POST /mcp/handshake`.
///
/// The counter is incremented before dispatch so rejected handshakes are
/// counted too. A body that fails JSON extraction is treated the same as a
/// structurally invalid payload.
#[instrument(skip_all)]
async fn handshake_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    state.metrics.record_handshake();

    let payload = payload.ok().map(|Json(value)| value);
    let ack = state.dispatcher.handshake(payload.as_ref())?;

    Ok(Json(json!({
        "response": ack.response,
        "data": ack.data,
    })))
}

/// Handle `GET /mcp/resource/{resource_id}`.
#[instrument(skip(state))]
async fn get_resource_handler(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let resource = state.dispatcher.get_resource(&resource_id)?;

    Ok(Json(json!({
        "data": resource.data,
        "status": resource.status,
    })))
}

/// Handle `POST /mcp/tool/{tool_id}`.
#[instrument(skip(state, body))]
async fn invoke_tool_handler(
    State(state): State<AppState>,
    Path(tool_id): Path<String>,
    body: Result<Json<ToolRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body
        .map_err(|e| Error::from(ToolError::invalid_arguments(e.body_text())))?;

    let output = state.dispatcher.invoke_tool(&tool_id, &request)?;

    Ok(Json(json!({
        "output": output.output,
        "status": output.status,
    })))
}

/// Handle `GET /mcp/prompt/{prompt_id}`.
#[instrument(skip(state))]
async fn get_prompt_handler(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let prompt = state.dispatcher.get_prompt(&prompt_id)?;

    Ok(Json(json!({
        "steps": prompt.steps,
        "description": prompt.description,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CapabilityRegistry;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let registry = Arc::new(CapabilityRegistry::with_defaults());
        AppState::new(
            Dispatcher::new(registry),
            Arc::new(HandshakeMetrics::new()),
        )
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_root_welcome_message() {
        let app = build_router(test_state());

        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "Welcome to Zero2K8s: This is the COP API Endpoint"
        );
    }

    #[tokio::test]
    async fn test_handshake_echoes_payload() {
        let app = build_router(test_state());

        let response = app
            .oneshot(post_json("/mcp/handshake", r#"{"foo": "bar"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["response"], "Mock MCP handshake successful");
        assert_eq!(body["data"]["foo"], "bar");
    }

    #[tokio::test]
    async fn test_handshake_rejects_null_payload() {
        let app = build_router(test_state());

        let response = app
            .oneshot(post_json("/mcp/handshake", "null"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Invalid MCP handshake");
    }

    #[tokio::test]
    async fn test_handshake_rejects_missing_body() {
        let app = build_router(test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/mcp/handshake")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Invalid MCP handshake");
    }

    #[tokio::test]
    async fn test_handshake_counter_counts_rejected_calls() {
        let state = test_state();
        let metrics = state.metrics.clone();

        let app = build_router(state);
        app.clone()
            .oneshot(post_json("/mcp/handshake", r#"{"ok": true}"#))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json("/mcp/handshake", "null"))
            .await
            .unwrap();

        assert_eq!(metrics.handshake_total(), 2);

        let response = app.oneshot(get_request("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            EXPOSITION_CONTENT_TYPE
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("handshake_requests_total 2"));
    }

    #[tokio::test]
    async fn test_get_resource_success() {
        let app = build_router(test_state());

        let response = app
            .oneshot(get_request("/mcp/resource/minikube_status"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "running");
        assert_eq!(body["data"]["version"], "1.32.0");
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn test_get_resource_not_found() {
        let app = build_router(test_state());

        let response = app
            .oneshot(get_request("/mcp/resource/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Resource not found");
    }

    #[tokio::test]
    async fn test_invoke_tool_success() {
        let app = build_router(test_state());

        let response = app
            .oneshot(post_json(
                "/mcp/tool/minikube_cmd",
                r#"{"command": "get pods"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["output"], "Executed: get pods");
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn test_invoke_tool_not_found() {
        let app = build_router(test_state());

        let response = app
            .oneshot(post_json(
                "/mcp/tool/unknown_tool",
                r#"{"command": "get pods"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Tool not found");
    }

    #[tokio::test]
    async fn test_invoke_tool_malformed_body() {
        let app = build_router(test_state());

        let response = app
            .oneshot(post_json("/mcp/tool/minikube_cmd", r#"{"params": {}}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invoke_tool_execution_failure_maps_to_500() {
        struct FailingTool;

        impl crate::domains::tools::ToolHandler for FailingTool {
            fn invoke(
                &self,
                _request: &ToolRequest,
            ) -> Result<crate::domains::tools::ToolOutput, ToolError> {
                Err(ToolError::execution_failed("backend unavailable"))
            }
        }

        let registry = CapabilityRegistry::builder()
            .register_tool("flaky", Arc::new(FailingTool))
            .build();
        let state = AppState::new(
            Dispatcher::new(Arc::new(registry)),
            Arc::new(HandshakeMetrics::new()),
        );

        let app = build_router(state);
        let response = app
            .oneshot(post_json("/mcp/tool/flaky", r#"{"command": "anything"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Tool execution failed")
        );
    }

    #[tokio::test]
    async fn test_get_prompt_success() {
        let app = build_router(test_state());

        let response = app
            .oneshot(get_request("/mcp/prompt/monitoring_workflow"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["steps"], json!(["scrape_metrics", "log_data"]));
        assert_eq!(body["description"], "Monitor system metrics");
    }

    #[tokio::test]
    async fn test_get_prompt_not_found() {
        let app = build_router(test_state());

        let response = app
            .oneshot(get_request("/mcp/prompt/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Prompt not found");
    }
}
