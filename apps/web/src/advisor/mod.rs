// Recommendation pipeline: profile → prompt → model → parsed records.
// All model calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod parser;
pub mod prompts;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::{Recommendation, UserProfile, MAX_RECOMMENDATIONS};

pub use parser::parse_recommendations;
pub use prompts::build_prompt;

/// Runs one generation for a profile and returns at most
/// `MAX_RECOMMENDATIONS` records.
///
/// A reply that parses into nothing is an error, same as a failed call.
pub async fn recommend(
    profile: &UserProfile,
    generator: &dyn TextGenerator,
) -> Result<Vec<Recommendation>, AppError> {
    if let Some(field) = profile.missing_field() {
        return Err(AppError::IncompleteProfile(field));
    }

    let kind = profile.goal_kind();
    let prompt = build_prompt(profile);
    debug!("Requesting {:?} recommendations ({} prompt chars)", kind, prompt.len());

    let text = generator.generate(&prompt).await?;

    let mut recs = parse_recommendations(&text, kind);
    if recs.is_empty() {
        return Err(AppError::NoRecommendations);
    }
    if recs.len() > MAX_RECOMMENDATIONS {
        debug!("Dropping {} extra recommendations", recs.len() - MAX_RECOMMENDATIONS);
        recs.truncate(MAX_RECOMMENDATIONS);
    }

    info!("Generated {} recommendations", recs.len());
    Ok(recs)
}
