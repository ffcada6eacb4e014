//! # porter-server
//!
//! HTTP API boundary for the Porter runtime. Provides:
//!
//! - `POST /gorilla/queue-commands`: translate and queue natural-language
//!   instructions, or forward them to a caller-supplied remote endpoint
//! - `POST /skills/{skill}/functions/{function}`: dispatch to the injected
//!   semantic-skill runtime
//! - `GET /health`: liveness probe
//!
//! Queueing and execution are deliberately separate: nothing reachable over
//! HTTP ever runs a queued command. Execution happens through the CLI, behind
//! its confirmation prompt.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use porter_config::schema::ServerConfig;
use porter_core::{PorterError, SkillRuntime};
use porter_queue::QueueBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Shared server state.
pub struct AppState {
    pub config: ServerConfig,
    pub queue: Arc<QueueBuilder>,
    pub skills: Arc<dyn SkillRuntime>,
    /// Client used to forward instructions to a caller-supplied endpoint.
    pub client: reqwest::Client,
    started: Instant,
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_secs: u64,
}

/// Queue request body: a single instruction, a batch, or both.
#[derive(Serialize, Deserialize)]
struct QueueRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    commands: Vec<String>,
}

impl QueueRequest {
    fn instructions(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.commands.len() + 1);
        if let Some(c) = &self.command {
            out.push(c.clone());
        }
        out.extend(self.commands.iter().cloned());
        out
    }
}

/// Query params for the queue endpoint.
#[derive(Deserialize)]
struct QueueParams {
    /// When set, the request is forwarded to this URL instead of the local
    /// translator, and the remote response is relayed verbatim.
    endpoint: Option<String>,
}

/// Build the Axum router.
pub fn build_router(
    config: ServerConfig,
    queue: Arc<QueueBuilder>,
    skills: Arc<dyn SkillRuntime>,
) -> Router {
    let cors = config.cors;
    let state = Arc::new(AppState {
        config,
        queue,
        skills,
        client: reqwest::Client::new(),
        started: Instant::now(),
    });

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/gorilla/queue-commands", post(queue_commands_handler))
        .route(
            "/skills/{skill}/functions/{function}",
            post(skill_function_handler),
        )
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// Queue natural-language instructions, or forward them when `?endpoint=` is
/// present. Forwarding is the one path where a failure aborts the request:
/// a non-success remote status comes back as 502 with the code embedded.
async fn queue_commands_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueueParams>,
    Json(req): Json<QueueRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    if let Some(endpoint) = params.endpoint {
        return forward_to_endpoint(&state, &endpoint, &req).await;
    }

    let instructions = req.instructions();
    info!(count = instructions.len(), "queueing instructions");

    let result = state.queue.queue(&instructions).await.map_err(|e| {
        warn!(error = %e, "queueing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(serde_json::to_value(&result).map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?))
}

/// Forward the request body to the caller-supplied endpoint and relay its
/// `{"commands": [...]}` JSON verbatim.
async fn forward_to_endpoint(
    state: &AppState,
    endpoint: &str,
    req: &QueueRequest,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    info!(endpoint = endpoint, "forwarding instructions to remote endpoint");

    let response = state
        .client
        .post(endpoint)
        .json(req)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, endpoint = endpoint, "remote endpoint unreachable");
            (
                StatusCode::BAD_GATEWAY,
                format!("remote endpoint unreachable: {e}"),
            )
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        let err = PorterError::RemoteEndpoint {
            status: status.as_u16(),
            message,
        };
        warn!(endpoint = endpoint, status = status.as_u16(), "remote endpoint failed");
        return Err((StatusCode::BAD_GATEWAY, err.to_string()));
    }

    let body: serde_json::Value = response.json().await.map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            format!("remote endpoint returned invalid JSON: {e}"),
        )
    })?;

    Ok(Json(body))
}

/// Dispatch one skill function call to the injected skill runtime. The
/// JSON object body becomes the function's key-value context variables.
async fn skill_function_handler(
    State(state): State<Arc<AppState>>,
    Path((skill, function)): Path<(String, String)>,
    body: Option<Json<serde_json::Value>>,
) -> Result<String, (StatusCode, String)> {
    info!(skill = %skill, function = %function, "received skill function request");

    let variables = context_variables(body.map(|Json(v)| v));

    match state.skills.invoke(&skill, &function, &variables).await {
        Ok(result) => Ok(result),
        Err(e @ PorterError::SkillNotFound { .. }) => {
            warn!(skill = %skill, function = %function, "skill function not found");
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

/// Flatten a JSON object body into string-valued context variables; non-string
/// values keep their JSON rendering.
fn context_variables(body: Option<serde_json::Value>) -> HashMap<String, String> {
    let mut variables = HashMap::new();
    if let Some(serde_json::Value::Object(map)) = body {
        for (key, value) in map {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            variables.insert(key, rendered);
        }
    }
    variables
}

/// Start the HTTP server.
pub async fn start_server(
    config: ServerConfig,
    queue: Arc<QueueBuilder>,
    skills: Arc<dyn SkillRuntime>,
) -> porter_core::Result<()> {
    let listen = config.listen.clone();
    let router = build_router(config, queue, skills);

    info!(listen = %listen, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| PorterError::Server(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| PorterError::Server(format!("server error: {e}")))?;

    Ok(())
}
