
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lib::utilities::INVALID_TEXT_MESSAGE;


#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{}", INVALID_TEXT_MESSAGE)]
    InvalidInput,
    #[error("Emotion detection failed: {0:#}")]
    DetectorFailure(#[from] anyhow::Error),
}

impl AnalyzeError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalyzeError::InvalidInput => StatusCode::BAD_REQUEST,
            AnalyzeError::DetectorFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        if let AnalyzeError::DetectorFailure(error) = &self {
            tracing::error!("Error detecting emotions: {:?}", error);
        }
        (self.status(), self.to_string()).into_response()
    }
}
