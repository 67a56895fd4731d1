use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use keyword_core::AnalyzeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Analyze(AnalyzeError::EmptyKeyword) => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
