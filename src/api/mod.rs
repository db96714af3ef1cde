// HTTP API
// Axum router exposing the analyzer and the text tools

use crate::models::{
    AnalyzeRequest, AnalyzeResponse, CaseRequest, CountRequest, ErrorBody, HealthResponse,
    SortRequest, SummarizeRequest, ToolResponse, WhitespaceRequest,
};
use crate::services::config_store::AppConfig;
use crate::services::detection::{validate_text, TextHeuristicAnalyzer, ValidationError};
use crate::services::text_processor::char_len;
use crate::services::text_tools::{clean_whitespace, convert_case, sort_lines, summarize, text_stats};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Unknown tool")]
    UnknownTool,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UnknownTool => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    let permissive_cors = state.config.server.permissive_cors;
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze_text))
        .route("/api/tools/:tool", post(run_tool))
        .layer(TraceLayer::new_for_http());
    let router = if permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.with_state(state)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Bodies are parsed as JSON whatever the declared content type.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

async fn analyze_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let request: AnalyzeRequest = parse_body(&body).map_err(|e| {
        error!(%request_id, error = %e, "analyze.body_rejected");
        ApiError::Internal
    })?;

    let text = request.text.unwrap_or_default();
    let chars = char_len(&text);
    if let Err(e) = validate_text(&text, &state.config.analysis) {
        warn!(%request_id, chars, reason = %e, "analyze.invalid_input");
        return Err(e.into());
    }

    let started = Instant::now();
    // Scoring runs off the async workers; a panic there surfaces as a 500.
    let response = tokio::task::spawn_blocking(move || {
        TextHeuristicAnalyzer::from_entropy().analyze(&text)
    })
    .await
    .map_err(|e| {
        error!(%request_id, error = %e, "analyze.failed");
        ApiError::Internal
    })?;

    info!(
        %request_id,
        chars,
        ai_score = response.ai_score,
        edits = response.humanized_changes.len(),
        model = %response.detected_ai_model,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analyze.completed"
    );
    Ok(Json(response))
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Tool {
    Case,
    Whitespace,
    Count,
    Summarize,
    Sort,
}

impl Tool {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "case" => Some(Self::Case),
            "whitespace" => Some(Self::Whitespace),
            "count" => Some(Self::Count),
            "summarize" => Some(Self::Summarize),
            "sort" => Some(Self::Sort),
            _ => None,
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        warn!(tool, error = %e, "tool.body_invalid");
        ApiError::Internal
    })
}

fn to_value<T: serde::Serialize>(payload: T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| {
        error!(error = %e, "tool.serialize_failed");
        ApiError::Internal
    })
}

async fn run_tool(
    Path(name): Path<String>,
    payload: Bytes,
) -> Result<Json<Value>, ApiError> {
    let tool = Tool::parse(&name).ok_or(ApiError::UnknownTool)?;
    let body: Value = parse_body(&payload).map_err(|e| {
        warn!(tool = %name, error = %e, "tool.body_rejected");
        ApiError::Internal
    })?;

    let result = match tool {
        Tool::Case => {
            let req: CaseRequest = decode(&name, body)?;
            convert_case(&req.text, req.style)
        }
        Tool::Whitespace => {
            let req: WhitespaceRequest = decode(&name, body)?;
            clean_whitespace(&req.text, req.mode)
        }
        Tool::Count => {
            let req: CountRequest = decode(&name, body)?;
            return Ok(Json(to_value(text_stats(&req.text))?));
        }
        Tool::Summarize => {
            let req: SummarizeRequest = decode(&name, body)?;
            summarize(&req.text, req.style)
        }
        Tool::Sort => {
            let req: SortRequest = decode(&name, body)?;
            sort_lines(&req.text, &req.options)
        }
    };

    info!(tool = %name, "tool.completed");
    Ok(Json(to_value(ToolResponse { result })?))
}
