// Prompt templates for the recommendation call.
// The labels and the section marker here must stay in sync with `parser`.

use crate::models::{GoalKind, UserProfile};

/// Prompt for profiles whose goal is "Higher Studies".
/// Replace: {name}, {age}, {qualifications}, {skills}, {interests}, {location}
pub const HIGHER_STUDIES_PROMPT_TEMPLATE: &str = r#"Act as a career counselor specializing in higher education. Provide 3 detailed recommendations for {name} based on:
- Age: {age}
- Qualifications: {qualifications}
- Skills: {skills}
- Interests: {interests}
- Location: {location}

For each recommendation, provide this exact format:
--- RECOMMENDATION 1
TITLE: [Recommendation title]
OVERVIEW: [Brief overview]
DETAILS: [Detailed description]
PROS: [comma, separated, list]
CONS: [comma, separated, list]
INSTITUTIONS: [comma, separated, list of top institutions]
RESOURCES: [comma, separated, list of resources]

Number the sections 1 to 3. Keep every field on a single line."#;

/// Prompt for every other goal.
/// Replace: {name}, {age}, {qualifications}, {skills}, {interests}, {location}
pub const CAREER_PROMPT_TEMPLATE: &str = r#"Act as a career counselor specializing in job placements. Provide 3 detailed career recommendations for {name} based on:
- Age: {age}
- Qualifications: {qualifications}
- Skills: {skills}
- Interests: {interests}
- Location: {location}

For each recommendation, provide this exact format:
--- RECOMMENDATION 1
TITLE: [Job title/role]
OVERVIEW: [Brief overview]
DETAILS: [Detailed description]
PROS: [comma, separated, list]
CONS: [comma, separated, list]
COMPANIES: [comma, separated, list of top companies]
SALARY: [Salary range]
GROWTH: [Growth potential]
SKILLS NEEDED: [comma, separated, list]
RESOURCES: [comma, separated, list of resources]

Number the sections 1 to 3. Keep every field on a single line."#;

/// Builds the prompt for a profile, choosing the template by goal.
pub fn build_prompt(profile: &UserProfile) -> String {
    let template = match profile.goal_kind() {
        GoalKind::HigherStudies => HIGHER_STUDIES_PROMPT_TEMPLATE,
        GoalKind::Career => CAREER_PROMPT_TEMPLATE,
    };

    render(template, |key| match key {
        "name" => Some(profile.name.as_str()),
        "age" => Some(profile.age.as_str()),
        "qualifications" => Some(profile.qualifications.as_str()),
        "skills" => Some(profile.skills.as_str()),
        "interests" => Some(profile.interests.as_str()),
        "location" => Some(profile.location.as_str()),
        _ => None,
    })
}

/// Fills `{key}` placeholders in a single pass over the template, so text
/// coming from a value is never scanned again. Unknown keys are kept as is.
fn render<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}').and_then(|close| Some((close, lookup(&after[..close])?))) {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
