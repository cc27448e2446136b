use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pages::error_page;
use crate::report::ReportError;

pub const GENERATION_FAILED_MESSAGE: &str = "Couldn't generate recommendations. Please try again.";
pub const DETAIL_FAILED_MESSAGE: &str =
    "Couldn't load recommendation details. Please try again from the beginning.";
pub const REPORT_FAILED_MESSAGE: &str = "An error occurred during PDF generation";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Page routes render the HTML error page; report downloads answer with a
/// plain-text 500. Details are logged here and never shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Incomplete profile: {0} is required")]
    IncompleteProfile(&'static str),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Model response contained no recommendations")]
    NoRecommendations,

    #[error("Invalid recommendation index: {0:?}")]
    InvalidIndex(String),

    #[error("No recommendation data at index {0}")]
    MissingRecommendation(usize),

    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::IncompleteProfile(field) => {
                tracing::warn!("Rejected profile without {field}");
                (StatusCode::BAD_REQUEST, GENERATION_FAILED_MESSAGE)
            }
            AppError::Generation(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, GENERATION_FAILED_MESSAGE)
            }
            AppError::NoRecommendations => {
                tracing::error!("LLM response parsed into zero recommendations");
                (StatusCode::BAD_GATEWAY, GENERATION_FAILED_MESSAGE)
            }
            AppError::InvalidIndex(raw) => {
                tracing::warn!("Invalid recommendation index {raw:?}");
                (StatusCode::BAD_REQUEST, DETAIL_FAILED_MESSAGE)
            }
            AppError::MissingRecommendation(index) => {
                tracing::warn!("No recommendation data at index {index}");
                (StatusCode::BAD_REQUEST, DETAIL_FAILED_MESSAGE)
            }
            AppError::Report(e) => {
                tracing::error!("Report error: {e}");
                return (StatusCode::INTERNAL_SERVER_ERROR, REPORT_FAILED_MESSAGE).into_response();
            }
        };

        (status, error_page(message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_errors_map_to_statuses() {
        assert_eq!(
            AppError::NoRecommendations.into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Generation(LlmError::EmptyContent).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InvalidIndex("7".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::IncompleteProfile("name").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_report_error_is_plain_text_500() {
        let response = AppError::Report(ReportError::MissingTitle).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
