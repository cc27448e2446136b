/// Upper bound on recommendations carried through the results page.
pub const MAX_RECOMMENDATIONS: usize = 3;

pub const DEFAULT_OVERVIEW: &str = "No overview provided.";
pub const DEFAULT_DETAILS: &str = "No details provided.";
/// Default for salary range and growth outlook.
pub const NOT_AVAILABLE: &str = "N/A";

/// One structured suggestion derived from one section of the model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub overview: String,
    pub details: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub resources: Vec<String>,
    pub track: Track,
}

/// Variant-specific fields. Only the fields of the active goal exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
    HigherStudies {
        institutions: Vec<String>,
    },
    Career {
        companies: Vec<String>,
        salary_range: String,
        growth: String,
        skills_needed: Vec<String>,
    },
}
