use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use markbook_client::FetchError;
use markbook_pdf::RenderError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to fetch record: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to render report: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::Fetch(FetchError::Status { .. }) => {
                (StatusCode::BAD_GATEWAY, "UpstreamError", self.to_string())
            }
            Self::Fetch(FetchError::Transport(_)) => {
                tracing::error!("records backend unreachable: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "UpstreamUnavailable",
                    self.to_string(),
                )
            }
            Self::Fetch(FetchError::Decode(_)) => {
                tracing::error!("records backend sent an undecodable body: {}", self);
                (StatusCode::BAD_GATEWAY, "DecodeError", self.to_string())
            }
            Self::Render(_) => {
                tracing::error!("report rendering aborted: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RenderError",
                    "Failed to generate report".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
