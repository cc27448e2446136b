//! Client-held state.
//!
//! Compass keeps no server-side session. Everything a later request needs
//! (the profile and up to three recommendations) is written into hidden form
//! fields when a page is rendered and read back from the submitted form. This
//! module is the only place that knows the field names and encodings.

pub mod escape;
pub mod recommendations;

use std::collections::HashMap;

use crate::models::UserProfile;

pub use recommendations::{
    decode_recommendation, decode_recommendations, encode_recommendation, encode_recommendations,
};

/// A submitted form body.
pub type FormFields = HashMap<String, String>;

/// Flattened form fields, in render order.
pub type EncodedFields = Vec<(String, String)>;

pub const NAME: &str = "name";
pub const AGE: &str = "age";
pub const QUALIFICATIONS: &str = "qualifications";
pub const SKILLS: &str = "skills";
pub const INTERESTS: &str = "interests";
pub const LOCATION: &str = "location";
pub const GOAL: &str = "goal";
/// Selected recommendation on the detail request.
pub const INDEX: &str = "index";

/// Reads a field, treating absence as an empty string.
pub fn field<'a>(form: &'a FormFields, key: &str) -> &'a str {
    form.get(key).map(String::as_str).unwrap_or_default()
}

pub fn decode_profile(form: &FormFields) -> UserProfile {
    UserProfile {
        name: field(form, NAME).to_string(),
        age: field(form, AGE).to_string(),
        qualifications: field(form, QUALIFICATIONS).to_string(),
        skills: field(form, SKILLS).to_string(),
        interests: field(form, INTERESTS).to_string(),
        location: field(form, LOCATION).to_string(),
        goal: field(form, GOAL).to_string(),
    }
}

pub fn encode_profile(profile: &UserProfile) -> EncodedFields {
    [
        (NAME, &profile.name),
        (AGE, &profile.age),
        (QUALIFICATIONS, &profile.qualifications),
        (SKILLS, &profile.skills),
        (INTERESTS, &profile.interests),
        (LOCATION, &profile.location),
        (GOAL, &profile.goal),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.clone()))
    .collect()
}
