//! `rec_<index>_<field>` encoding of recommendations.
//!
//! Scalar fields are written verbatim, list fields through `escape::join_list`.
//! On decode, an absent scalar takes the same default the parser uses, while a
//! present value (even an empty one) is kept as is.

use crate::form_state::escape::{join_list, split_list};
use crate::form_state::{EncodedFields, FormFields};
use crate::models::{
    GoalKind, Recommendation, Track, DEFAULT_DETAILS, DEFAULT_OVERVIEW, MAX_RECOMMENDATIONS,
    NOT_AVAILABLE,
};

const TITLE: &str = "title";
const OVERVIEW: &str = "overview";
const DETAILS: &str = "details";
const PROS: &str = "pros";
const CONS: &str = "cons";
const RESOURCES: &str = "resources";
const INSTITUTIONS: &str = "institutions";
const COMPANIES: &str = "companies";
const SALARY: &str = "salary";
const GROWTH: &str = "growth";
const SKILLS_NEEDED: &str = "skills_needed";

pub fn field_name(index: usize, field: &str) -> String {
    format!("rec_{index}_{field}")
}

/// Flattens one recommendation into fields at `index`.
pub fn encode_recommendation(index: usize, rec: &Recommendation) -> EncodedFields {
    let mut fields = vec![
        (field_name(index, TITLE), rec.title.clone()),
        (field_name(index, OVERVIEW), rec.overview.clone()),
        (field_name(index, DETAILS), rec.details.clone()),
        (field_name(index, PROS), join_list(&rec.pros)),
        (field_name(index, CONS), join_list(&rec.cons)),
        (field_name(index, RESOURCES), join_list(&rec.resources)),
    ];

    match &rec.track {
        Track::HigherStudies { institutions } => {
            fields.push((field_name(index, INSTITUTIONS), join_list(institutions)));
        }
        Track::Career {
            companies,
            salary_range,
            growth,
            skills_needed,
        } => {
            fields.push((field_name(index, COMPANIES), join_list(companies)));
            fields.push((field_name(index, SALARY), salary_range.clone()));
            fields.push((field_name(index, GROWTH), growth.clone()));
            fields.push((field_name(index, SKILLS_NEEDED), join_list(skills_needed)));
        }
    }

    fields
}

/// Flattens up to `MAX_RECOMMENDATIONS` recommendations at indices 0, 1, 2.
pub fn encode_recommendations(recs: &[Recommendation]) -> EncodedFields {
    recs.iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .flat_map(|(index, rec)| encode_recommendation(index, rec))
        .collect()
}

/// Rebuilds the recommendation at `index`, or `None` when its title is
/// absent or empty. Fields of the other goal variant are never read.
pub fn decode_recommendation(
    form: &FormFields,
    index: usize,
    kind: GoalKind,
) -> Option<Recommendation> {
    let scalar = |field: &str, default: &str| -> String {
        form.get(&field_name(index, field))
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };
    let list = |field: &str| -> Vec<String> {
        form.get(&field_name(index, field))
            .map(|encoded| split_list(encoded))
            .unwrap_or_default()
    };

    let title = form
        .get(&field_name(index, TITLE))
        .filter(|title| !title.is_empty())?
        .clone();

    let track = match kind {
        GoalKind::HigherStudies => Track::HigherStudies {
            institutions: list(INSTITUTIONS),
        },
        GoalKind::Career => Track::Career {
            companies: list(COMPANIES),
            salary_range: scalar(SALARY, NOT_AVAILABLE),
            growth: scalar(GROWTH, NOT_AVAILABLE),
            skills_needed: list(SKILLS_NEEDED),
        },
    };

    Some(Recommendation {
        title,
        overview: scalar(OVERVIEW, DEFAULT_OVERVIEW),
        details: scalar(DETAILS, DEFAULT_DETAILS),
        pros: list(PROS),
        cons: list(CONS),
        resources: list(RESOURCES),
        track,
    })
}

/// Rebuilds every titled recommendation at indices 0..`MAX_RECOMMENDATIONS`,
/// in index order.
pub fn decode_recommendations(form: &FormFields, kind: GoalKind) -> Vec<Recommendation> {
    (0..MAX_RECOMMENDATIONS)
        .filter_map(|index| decode_recommendation(form, index, kind))
        .collect()
}
