use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use luckydraw_core::{DrawError, DrawService, WinnerInput};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub fn router(service: Arc<DrawService>) -> Router {
    Router::new()
        .route("/set-winner", post(set_winner))
        .route("/get-winner", get(get_winner))
        .route("/reset-winner", post(reset_winner))
        .route("/healthz", get(health))
        .with_state(service)
}

/// `number` stays a raw JSON value so shape validation happens in the
/// handler and always answers in the 400 `{success, message}` shape,
/// instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct SetWinnerRequest {
    pub number: Option<serde_json::Value>,
}

/// Wire shape shared by set-winner and get-winner. On set-winner,
/// `success:false` means a winner already existed and `number` is that
/// winner, not the one just submitted.
#[derive(Debug, Serialize)]
pub struct WinnerResponse {
    pub success: bool,
    pub number: u32,
}

async fn set_winner(
    State(service): State<Arc<DrawService>>,
    Json(req): Json<SetWinnerRequest>,
) -> Result<Json<WinnerResponse>, ApiError> {
    let input = req
        .number
        .as_ref()
        .map(WinnerInput::from_json)
        .transpose()?;
    let outcome = service.assign_fixed_winner(input.as_ref())?;
    Ok(Json(WinnerResponse {
        success: outcome.accepted,
        number: outcome.number,
    }))
}

async fn get_winner(State(service): State<Arc<DrawService>>) -> Json<WinnerResponse> {
    let draw = service.draw_number();
    Json(WinnerResponse {
        success: true,
        number: draw.number,
    })
}

async fn reset_winner(State(service): State<Arc<DrawService>>) -> Json<serde_json::Value> {
    service.reset();
    Json(json!({ "success": true }))
}

async fn health() -> &'static str {
    "ok"
}

/// Maps core errors at the request boundary: invalid input becomes a
/// 400 with a message field, everything else a 500.
pub struct ApiError(DrawError);

impl From<DrawError> for ApiError {
    fn from(err: DrawError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(json!({
            "success": false,
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
