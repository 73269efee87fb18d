//! HTTP surface: the board endpoint plus the static front page.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::error;

use crate::board::{build_board, BoardResponse, NormalizationConfig};
use crate::config::{AppConfig, HTTP_TIMEOUT_SECS};

/// Shared per-request context: the HTTP client and the alias table are
/// built once at startup and reused across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
    pub normalization: Arc<NormalizationConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            config,
            http,
            normalization: Arc::new(NormalizationConfig::default()),
        })
    }
}

/// Build the application router: the JSON board API plus the static
/// front page served from `static/`.
pub fn router(state: AppState) -> Router {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

    Router::new()
        .route("/api/board", get(board_handler))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}

async fn board_handler(State(state): State<AppState>) -> Result<Json<BoardResponse>, BoardError> {
    let board = build_board(&state.http, &state.config, &state.normalization).await?;
    Ok(Json(board))
}

/// Error wrapper mapping any board failure to one 500 JSON shape.
///
/// Either upstream failing fails the request as a unit; the client sees
/// a fixed error tag plus the underlying message.
pub struct BoardError(anyhow::Error);

impl<E> From<E> for BoardError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        error!("Board request failed: {:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to load board",
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_body_shape() {
        let err = BoardError(anyhow::anyhow!("Odds API error 401: bad key"));
        let body = json!({
            "error": "Failed to load board",
            "message": err.0.to_string(),
        });

        assert_eq!(body["error"], json!("Failed to load board"));
        assert_eq!(body["message"], json!("Odds API error 401: bad key"));
    }
}
