//! Keyword analysis routes

use axum::Json;
use serde::Deserialize;

use keyword_core::{KeywordAnalyzer, KeywordReport};

use crate::error::AppError;

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw keyword; a missing field is treated as empty and rejected
    #[serde(default)]
    pub keyword: String,
}

/// POST /api/analyze
/// Scores a keyword and returns the full report
pub async fn analyze_keyword(
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<KeywordReport>, AppError> {
    let report = KeywordAnalyzer::analyze(&payload.keyword)?;

    Ok(Json(report))
}
