//! Response parser: turns the model's free-text reply into typed recommendations.
//!
//! The reply is expected to follow the layout requested in `prompts`: sections
//! introduced by `--- RECOMMENDATION <n>`, each holding one `LABEL: value` per
//! line. Parsing is lenient. Lines are classified into a fixed `Label` set,
//! folded into a `RecordBuilder`, and a record is emitted only when a title
//! was seen.
//!
//! Label matching is a substring test, so a label embedded inside another
//! field's text can claim that line. That is a property of the format.

use crate::models::{
    GoalKind, Recommendation, Track, DEFAULT_DETAILS, DEFAULT_OVERVIEW, NOT_AVAILABLE,
};

const SECTION_MARKER: &str = "--- RECOMMENDATION";
/// Used when the model dropped the dashes from the section marker.
const FALLBACK_SECTION_MARKER: &str = "RECOMMENDATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Title,
    Overview,
    Details,
    Pros,
    Cons,
    Resources,
    Institutions,
    Companies,
    Salary,
    Growth,
    SkillsNeeded,
}

impl Label {
    const COMMON: [Label; 6] = [
        Label::Title,
        Label::Overview,
        Label::Details,
        Label::Pros,
        Label::Cons,
        Label::Resources,
    ];
    const HIGHER_STUDIES: [Label; 1] = [Label::Institutions];
    const CAREER: [Label; 4] = [
        Label::Companies,
        Label::Salary,
        Label::Growth,
        Label::SkillsNeeded,
    ];

    fn marker(self) -> &'static str {
        match self {
            Label::Title => "TITLE:",
            Label::Overview => "OVERVIEW:",
            Label::Details => "DETAILS:",
            Label::Pros => "PROS:",
            Label::Cons => "CONS:",
            Label::Resources => "RESOURCES:",
            Label::Institutions => "INSTITUTIONS:",
            Label::Companies => "COMPANIES:",
            Label::Salary => "SALARY:",
            Label::Growth => "GROWTH:",
            Label::SkillsNeeded => "SKILLS NEEDED:",
        }
    }

    /// Labels checked for a goal, in priority order.
    fn candidates(kind: GoalKind) -> impl Iterator<Item = Label> {
        let common: &'static [Label] = &Self::COMMON;
        let variant: &'static [Label] = match kind {
            GoalKind::HigherStudies => &Self::HIGHER_STUDIES,
            GoalKind::Career => &Self::CAREER,
        };
        common.iter().chain(variant.iter()).copied()
    }
}

/// Parses a model reply into recommendations, in the order they appear.
///
/// Never fails: sections without a `TITLE:` line are skipped and missing
/// fields take their defaults.
pub fn parse_recommendations(text: &str, kind: GoalKind) -> Vec<Recommendation> {
    split_sections(text)
        .into_iter()
        .filter_map(|section| parse_section(section, kind))
        .collect()
}

/// Splits on the section marker and drops the preamble before the first one.
fn split_sections(text: &str) -> Vec<&str> {
    let mut sections: Vec<&str> = text.split(SECTION_MARKER).collect();
    if sections.len() <= 1 {
        sections = text.split(FALLBACK_SECTION_MARKER).collect();
    }
    sections.into_iter().skip(1).collect()
}

fn parse_section(section: &str, kind: GoalKind) -> Option<Recommendation> {
    let mut builder = RecordBuilder::default();

    for line in section.lines() {
        let line = strip_emphasis(line);
        if line.is_empty() {
            continue;
        }
        if let Some((label, value)) = classify(&line, kind) {
            builder.apply(label, value);
        }
    }

    builder.build(kind)
}

fn strip_emphasis(line: &str) -> String {
    line.replace('*', "").trim().to_string()
}

/// Finds the first label present in the line and returns the text after it.
fn classify(line: &str, kind: GoalKind) -> Option<(Label, &str)> {
    Label::candidates(kind).find_map(|label| {
        line.find(label.marker())
            .map(|pos| (label, clean_value(&line[pos + label.marker().len()..])))
    })
}

fn clean_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '[' || c == ']')
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default)]
struct RecordBuilder {
    title: Option<String>,
    overview: Option<String>,
    details: Option<String>,
    pros: Option<Vec<String>>,
    cons: Option<Vec<String>>,
    resources: Option<Vec<String>>,
    institutions: Option<Vec<String>>,
    companies: Option<Vec<String>>,
    salary_range: Option<String>,
    growth: Option<String>,
    skills_needed: Option<Vec<String>>,
}

impl RecordBuilder {
    fn apply(&mut self, label: Label, value: &str) {
        match label {
            Label::Title => self.title = Some(value.to_string()),
            Label::Overview => self.overview = Some(value.to_string()),
            Label::Details => self.details = Some(value.to_string()),
            Label::Salary => self.salary_range = Some(value.to_string()),
            Label::Growth => self.growth = Some(value.to_string()),
            Label::Pros => self.pros = Some(split_list(value)),
            Label::Cons => self.cons = Some(split_list(value)),
            Label::Resources => self.resources = Some(split_list(value)),
            Label::Institutions => self.institutions = Some(split_list(value)),
            Label::Companies => self.companies = Some(split_list(value)),
            Label::SkillsNeeded => self.skills_needed = Some(split_list(value)),
        }
    }

    fn build(self, kind: GoalKind) -> Option<Recommendation> {
        let title = self.title.filter(|t| !t.is_empty())?;

        let track = match kind {
            GoalKind::HigherStudies => Track::HigherStudies {
                institutions: self.institutions.unwrap_or_default(),
            },
            GoalKind::Career => Track::Career {
                companies: self.companies.unwrap_or_default(),
                salary_range: self
                    .salary_range
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                growth: self.growth.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                skills_needed: self.skills_needed.unwrap_or_default(),
            },
        };

        Some(Recommendation {
            title,
            overview: self
                .overview
                .unwrap_or_else(|| DEFAULT_OVERVIEW.to_string()),
            details: self.details.unwrap_or_else(|| DEFAULT_DETAILS.to_string()),
            pros: self.pros.unwrap_or_default(),
            cons: self.cons.unwrap_or_default(),
            resources: self.resources.unwrap_or_default(),
            track,
        })
    }
}
