//! Printable markup for the two report variants. A4, inline CSS only, since
//! the converter does not fetch external resources.

use crate::models::{Recommendation, Track, UserProfile};
use crate::pages::escape;

const SUMMARY_STYLE: &str = r#"
@page { size: A4; margin: 1cm; }
body { font-family: 'Helvetica', 'Arial', sans-serif; color: #333; line-height: 1.5; }
.header { background-color: #4361ee; color: white; padding: 30px; border-radius: 10px; margin-bottom: 30px; }
.header h1 { margin: 0; font-size: 28pt; }
.header p { margin: 5px 0 0; opacity: 0.9; }
.profile-section { background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 30px; border-left: 5px solid #4361ee; }
.profile-item { margin-bottom: 8px; font-size: 11pt; }
.profile-item strong { color: #4361ee; width: 150px; display: inline-block; }
.rec-card { border: 1px solid #e0e0e0; border-radius: 8px; margin-bottom: 25px; padding: 20px; page-break-inside: avoid; }
.rec-title { color: #4361ee; font-size: 18pt; margin-top: 0; border-bottom: 1px solid #eee; padding-bottom: 10px; }
.section-label { font-weight: bold; color: #3f37c9; margin-top: 15px; display: block; text-transform: uppercase; font-size: 9pt; letter-spacing: 1px; }
.content-text { margin: 5px 0 15px; font-size: 11pt; text-align: justify; }
.tag { background-color: #e9ecef; padding: 3px 10px; border-radius: 15px; font-size: 9pt; display: inline-block; margin: 0 5px 5px 0; color: #495057; }
.footer { text-align: center; color: #999; font-size: 9pt; margin-top: 50px; border-top: 1px solid #eee; padding-top: 20px; }
"#;

const DETAIL_STYLE: &str = r#"
@page { size: A4; margin: 1.5cm; }
body { font-family: 'Helvetica', 'Arial', sans-serif; color: #333; line-height: 1.6; font-size: 11pt; }
.header { border-bottom: 2px solid #4361ee; padding-bottom: 10px; margin-bottom: 30px; }
.header h1 { color: #4361ee; margin: 0; font-size: 24pt; }
.header p { color: #666; margin: 5px 0 0; }
.rec-title-box { background-color: #4361ee; color: white; padding: 20px; border-radius: 8px; margin-bottom: 25px; }
.rec-title-box h2 { margin: 0; font-size: 20pt; }
.section { margin-bottom: 25px; }
.section-title { color: #3f37c9; font-size: 14pt; font-weight: bold; border-left: 4px solid #4361ee; padding-left: 10px; margin-bottom: 10px; }
.box { background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin-bottom: 15px; }
.pros-box { border-left: 4px solid #4cc9f0; }
.cons-box { border-left: 4px solid #f72585; }
ul { margin: 5px 0; padding-left: 20px; }
li { margin-bottom: 5px; }
.footer { text-align: center; color: #999; font-size: 9pt; margin-top: 40px; border-top: 1px solid #eee; padding-top: 20px; }
"#;

/// Summary report covering every recommendation passed in.
pub fn summary_markup(profile: &UserProfile, recs: &[Recommendation]) -> String {
    let cards: String = recs.iter().map(summary_card).collect();

    format!(
        r#"<html>
<head><meta charset="utf-8"><style>{SUMMARY_STYLE}</style></head>
<body>
<div class="header">
<h1>Career Compass Report</h1>
<p>Personalized Recommendations for {name}</p>
</div>
<div class="profile-section">
<div class="profile-item"><strong>Age:</strong> {age}</div>
<div class="profile-item"><strong>Qualifications:</strong> {qualifications}</div>
<div class="profile-item"><strong>Skills:</strong> {skills}</div>
<div class="profile-item"><strong>Interests:</strong> {interests}</div>
<div class="profile-item"><strong>Desired Location:</strong> {location}</div>
<div class="profile-item"><strong>Primary Goal:</strong> {goal}</div>
</div>
<h2 style="color: #4361ee; margin-bottom: 20px;">Top Career Recommendations</h2>
{cards}
<div class="footer">Generated by Career Compass AI &bull; Empowering Your Professional Journey</div>
</body>
</html>"#,
        name = escape(&profile.name),
        age = escape(&profile.age),
        qualifications = escape(&profile.qualifications),
        skills = escape(&profile.skills),
        interests = escape(&profile.interests),
        location = escape(&profile.location),
        goal = escape(&profile.goal),
    )
}

fn summary_card(rec: &Recommendation) -> String {
    let track = match &rec.track {
        Track::HigherStudies { institutions } => format!(
            r#"<span class="section-label">Top Institutions</span><div>{}</div>"#,
            tags(institutions)
        ),
        Track::Career {
            companies,
            salary_range,
            growth,
            ..
        } => format!(
            r#"<span class="section-label">Target Companies</span><div>{}</div>
<p class="profile-item"><strong>Expected Salary:</strong> {}</p>
<p class="profile-item"><strong>Growth Potential:</strong> {}</p>"#,
            tags(companies),
            escape(salary_range),
            escape(growth)
        ),
    };

    format!(
        r#"<div class="rec-card">
<h3 class="rec-title">{title}</h3>
<span class="section-label">Overview</span>
<p class="content-text">{overview}</p>
<span class="section-label">Detailed Path</span>
<p class="content-text">{details}</p>
{track}
</div>
"#,
        title = escape(&rec.title),
        overview = escape(&rec.overview),
        details = escape(&rec.details),
    )
}

/// Single-recommendation analysis.
pub fn detail_markup(profile: &UserProfile, rec: &Recommendation) -> String {
    let track = match &rec.track {
        Track::HigherStudies { institutions } => format!(
            r#"<div class="section">
<div class="section-title">Recommended Institutions</div>
<ul>{}</ul>
</div>"#,
            list_items(institutions)
        ),
        Track::Career {
            companies,
            salary_range,
            growth,
            skills_needed,
        } => format!(
            r#"<div class="section">
<div class="section-title">Industry Insights</div>
<p><strong>Target Companies:</strong> {}</p>
<p><strong>Required Skills:</strong> {}</p>
<p><strong>Market Outlook:</strong> {} ({})</p>
</div>"#,
            escape(&companies.join(", ")),
            escape(&skills_needed.join(", ")),
            escape(growth),
            escape(salary_range)
        ),
    };

    format!(
        r#"<html>
<head><meta charset="utf-8"><style>{DETAIL_STYLE}</style></head>
<body>
<div class="header">
<h1>Detailed Career Analysis</h1>
<p>Prepared for {name} &bull; {goal}</p>
</div>
<div class="rec-title-box"><h2>{title}</h2></div>
<div class="section">
<div class="section-title">Overview</div>
<p>{overview}</p>
</div>
<div class="section">
<div class="section-title">In-Depth Analysis</div>
<p>{details}</p>
</div>
<div class="section">
<div class="section-title">The Balanced View</div>
<div class="box pros-box"><strong>Advantages:</strong><ul>{pros}</ul></div>
<div class="box cons-box"><strong>Challenges:</strong><ul>{cons}</ul></div>
</div>
{track}
<div class="section">
<div class="section-title">Learning Resources</div>
<ul>{resources}</ul>
</div>
<div class="footer">Generated by Career Compass AI &bull; {name}'s Professional Roadmap</div>
</body>
</html>"#,
        name = escape(&profile.name),
        goal = escape(&profile.goal),
        title = escape(&rec.title),
        overview = escape(&rec.overview),
        details = escape(&rec.details),
        pros = list_items(&rec.pros),
        cons = list_items(&rec.cons),
        resources = list_items(&rec.resources),
    )
}

fn tags(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="tag">{}</span>"#, escape(item)))
        .collect()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(goal: &str) -> UserProfile {
        UserProfile {
            name: "Asha Rao".to_string(),
            age: "24".to_string(),
            qualifications: "B.Tech".to_string(),
            skills: "Python".to_string(),
            interests: "AI".to_string(),
            location: "Pune".to_string(),
            goal: goal.to_string(),
        }
    }

    fn career(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            overview: "Overview text".to_string(),
            details: "Details text".to_string(),
            pros: vec!["pay".to_string(), "  ".to_string()],
            cons: vec!["hours".to_string()],
            resources: vec!["Coursera".to_string()],
            track: Track::Career {
                companies: vec!["Acme".to_string(), "Globex".to_string()],
                salary_range: "12 LPA".to_string(),
                growth: "High".to_string(),
                skills_needed: vec!["SQL".to_string(), "Python".to_string()],
            },
        }
    }

    fn academic(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            overview: "Overview".to_string(),
            details: "Details".to_string(),
            pros: vec![],
            cons: vec![],
            resources: vec![],
            track: Track::HigherStudies {
                institutions: vec!["ETH Zurich".to_string()],
            },
        }
    }

    #[test]
    fn test_summary_has_one_card_per_recommendation() {
        let markup = summary_markup(&profile("Job"), &[career("Analyst"), career("Engineer")]);
        assert_eq!(markup.matches(r#"class="rec-card""#).count(), 2);
        assert!(markup.contains("Personalized Recommendations for Asha Rao"));
        assert!(markup.contains(r#"<span class="tag">Globex</span>"#));
        assert!(markup.contains("<strong>Expected Salary:</strong> 12 LPA"));
    }

    #[test]
    fn test_summary_higher_studies_shows_institutions_only() {
        let markup = summary_markup(&profile("Higher Studies"), &[academic("MSc")]);
        assert!(markup.contains("Top Institutions"));
        assert!(markup.contains("ETH Zurich"));
        assert!(!markup.contains("Target Companies"));
    }

    #[test]
    fn test_summary_with_no_recommendations_still_renders() {
        let markup = summary_markup(&profile("Job"), &[]);
        assert!(!markup.contains("rec-card\">"));
        assert!(markup.contains("Career Compass Report"));
    }

    #[test]
    fn test_detail_career_sections() {
        let markup = detail_markup(&profile("Job"), &career("Analyst"));
        assert!(markup.contains("<h2>Analyst</h2>"));
        assert!(markup.contains("<ul><li>pay</li></ul>"));
        assert!(markup.contains("Target Companies:</strong> Acme, Globex"));
        assert!(markup.contains("Market Outlook:</strong> High (12 LPA)"));
        assert!(!markup.contains("Recommended Institutions"));
    }

    #[test]
    fn test_detail_higher_studies_sections() {
        let markup = detail_markup(&profile("Higher Studies"), &academic("MSc"));
        assert!(markup.contains("<li>ETH Zurich</li>"));
        assert!(!markup.contains("Industry Insights"));
    }

    #[test]
    fn test_markup_escapes_model_text() {
        let mut rec = career("<script>alert(1)</script>");
        rec.overview = "A & B".to_string();
        let markup = detail_markup(&profile("Job"), &rec);
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("A &amp; B"));
    }
}
