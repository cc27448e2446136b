//! Axum route handlers for the profile form, results and detail pages.

use axum::{
    extract::{Form, State},
    response::Html,
};
use tracing::info;

use crate::advisor::recommend;
use crate::errors::AppError;
use crate::form_state::{self, decode_profile, decode_recommendation, FormFields};
use crate::models::MAX_RECOMMENDATIONS;
use crate::pages::{detail_page, index_page, loading_page, results_page};
use crate::state::AppState;

/// GET /
pub async fn handle_index() -> Html<String> {
    index_page()
}

/// POST /
///
/// Shows the loading page, which re-posts the profile to /generate.
pub async fn handle_submit_profile(Form(form): Form<FormFields>) -> Html<String> {
    loading_page(&decode_profile(&form))
}

/// POST /generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<FormFields>,
) -> Result<Html<String>, AppError> {
    let profile = decode_profile(&form);
    info!("Generating recommendations (goal: {:?})", profile.goal);

    let recs = recommend(&profile, state.generator.as_ref()).await?;

    Ok(results_page(&profile, &recs))
}

/// POST /recommendation_detail
///
/// Rebuilds the selected record from the submitted form. The index must be
/// 0, 1 or 2 and the record there must have a title.
pub async fn handle_recommendation_detail(
    Form(form): Form<FormFields>,
) -> Result<Html<String>, AppError> {
    let index = parse_index(form.get(form_state::INDEX).map(String::as_str))?;

    let profile = decode_profile(&form);
    let rec = decode_recommendation(&form, index, profile.goal_kind())
        .ok_or(AppError::MissingRecommendation(index))?;

    Ok(detail_page(&profile, &rec))
}

/// An absent index selects the first record.
fn parse_index(raw: Option<&str>) -> Result<usize, AppError> {
    let raw = raw.unwrap_or("0");
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index < MAX_RECOMMENDATIONS)
        .ok_or_else(|| AppError::InvalidIndex(raw.to_string()))
}
