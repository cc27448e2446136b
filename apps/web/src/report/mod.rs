//! PDF reports: a summary of every recommendation and a single-recommendation
//! deep dive. Markup is built here; turning it into PDF bytes is delegated to
//! a `DocumentRasterizer`.

pub mod converter;
pub mod handlers;
pub mod markup;

use async_trait::async_trait;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub use converter::HtmlToPdfConverter;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("recommendation title is missing")]
    MissingTitle,

    #[error("failed to run converter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("converter exited with {status}: {stderr}")]
    Converter { status: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns HTML markup into a PDF document.
#[async_trait]
pub trait DocumentRasterizer: Send + Sync {
    async fn rasterize(&self, markup: &str) -> Result<Vec<u8>, ReportError>;
}

/// `Career_Report_<name>.pdf`
pub fn summary_file_name(user_name: &str) -> String {
    format!("Career_Report_{}.pdf", file_stem(user_name))
}

/// `Detailed_Analysis_<title>.pdf`
pub fn detail_file_name(title: &str) -> String {
    format!("Detailed_Analysis_{}.pdf", file_stem(title))
}

/// Spaces become underscores. Control characters, quotes and backslashes
/// are dropped; everything else, including non-ASCII text, is kept.
fn file_stem(text: &str) -> String {
    text.chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect()
}

/// `Content-Disposition` value with an ASCII `filename` for old clients and
/// the full name as a percent-encoded UTF-8 `filename*` (RFC 6266).
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .filter(|c| c.is_ascii_graphic() && *c != '"' && *c != '\\')
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    )
}

/// Serves PDF bytes as a download.
pub fn pdf_attachment(file_name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(file_name)),
        ],
        bytes,
    )
        .into_response()
}
