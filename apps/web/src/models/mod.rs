pub mod profile;
pub mod recommendation;

pub use profile::{GoalKind, UserProfile, HIGHER_STUDIES};
pub use recommendation::{
    Recommendation, Track, DEFAULT_DETAILS, DEFAULT_OVERVIEW, MAX_RECOMMENDATIONS, NOT_AVAILABLE,
};
