//! Axum route handlers for PDF downloads.
//!
//! Every failure here, including a missing title, surfaces as the plain-text
//! 500 rather than the HTML error page.

use axum::{
    extract::{Form, State},
    response::Response,
};
use tracing::info;

use crate::errors::AppError;
use crate::form_state::{decode_profile, decode_recommendation, decode_recommendations, FormFields};
use crate::report::{
    detail_file_name, markup::{detail_markup, summary_markup}, pdf_attachment, summary_file_name,
    ReportError,
};
use crate::state::AppState;

/// POST /download_report
///
/// Summary of every titled recommendation in the form. An empty set still
/// produces a report with the profile block only.
pub async fn handle_download_report(
    State(state): State<AppState>,
    Form(form): Form<FormFields>,
) -> Result<Response, AppError> {
    let profile = decode_profile(&form);
    let recs = decode_recommendations(&form, profile.goal_kind());

    let markup = summary_markup(&profile, &recs);
    let pdf = state.rasterizer.rasterize(&markup).await?;

    info!("Summary report rendered ({} recommendations)", recs.len());
    Ok(pdf_attachment(&summary_file_name(&profile.name), pdf))
}

/// POST /download_detailed_report
///
/// Renders the record at index 0, which the detail page fills with the
/// selected recommendation.
pub async fn handle_download_detailed_report(
    State(state): State<AppState>,
    Form(form): Form<FormFields>,
) -> Result<Response, AppError> {
    let profile = decode_profile(&form);
    let rec = decode_recommendation(&form, 0, profile.goal_kind()).ok_or(ReportError::MissingTitle)?;

    let markup = detail_markup(&profile, &rec);
    let pdf = state.rasterizer.rasterize(&markup).await?;

    info!("Detailed report rendered for {:?}", rec.title);
    Ok(pdf_attachment(&detail_file_name(&rec.title), pdf))
}
