use axum::response::Html;

use crate::form_state::{self, encode_profile, encode_recommendation, encode_recommendations};
use crate::models::{Recommendation, Track, UserProfile, HIGHER_STUDIES};
use crate::pages::{escape, hidden_inputs, layout};

/// GET /
pub fn index_page() -> Html<String> {
    let body = format!(
        r#"<h1>Career Compass</h1>
<p>Tell us about yourself and get three personalised recommendations.</p>
<form class="profile card" method="post" action="/">
<label for="name">Name</label>
<input id="name" name="{name}" required>
<label for="age">Age</label>
<input id="age" name="{age}" type="number" min="10" max="100" required>
<label for="qualifications">Qualifications</label>
<textarea id="qualifications" name="{qualifications}" rows="2" required></textarea>
<label for="skills">Skills</label>
<textarea id="skills" name="{skills}" rows="2" required></textarea>
<label for="interests">Interests</label>
<textarea id="interests" name="{interests}" rows="2" required></textarea>
<label for="location">Preferred location</label>
<input id="location" name="{location}" required>
<label for="goal">Goal</label>
<select id="goal" name="{goal}" required>
<option value="{higher_studies}">{higher_studies}</option>
<option value="Job">Job</option>
</select>
<button type="submit">Get recommendations</button>
</form>"#,
        name = form_state::NAME,
        age = form_state::AGE,
        qualifications = form_state::QUALIFICATIONS,
        skills = form_state::SKILLS,
        interests = form_state::INTERESTS,
        location = form_state::LOCATION,
        goal = form_state::GOAL,
        higher_studies = HIGHER_STUDIES,
    );
    layout("Your profile", &body)
}

/// POST /
///
/// Echoes the profile into a form that posts itself to /generate, so the
/// user sees progress while the model call runs.
pub fn loading_page(profile: &UserProfile) -> Html<String> {
    let body = format!(
        r#"<h1>Finding your best options, {name}…</h1>
<p>This usually takes a few seconds.</p>
<form id="profile" method="post" action="/generate">
{hidden}
<noscript><button type="submit">Continue</button></noscript>
</form>
<script>document.getElementById('profile').submit();</script>"#,
        name = escape(&profile.name),
        hidden = hidden_inputs(&encode_profile(profile)),
    );
    layout("Generating", &body)
}

/// POST /generate
///
/// One form carries the whole client-held state. Each card's button submits
/// it to the detail view with its own index; the download button re-targets
/// it at the summary report.
pub fn results_page(profile: &UserProfile, recs: &[Recommendation]) -> Html<String> {
    let mut state = encode_profile(profile);
    state.extend(encode_recommendations(recs));

    let cards: String = recs
        .iter()
        .enumerate()
        .map(|(index, rec)| {
            format!(
                r#"<section class="card">
<h3>{title}</h3>
<p>{overview}</p>
{summary}
<button type="submit" name="{index_field}" value="{index}">View details</button>
</section>"#,
                title = escape(&rec.title),
                overview = escape(&rec.overview),
                summary = track_summary(&rec.track),
                index_field = form_state::INDEX,
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Recommendations for {name}</h1>
<p class="label">Goal: {goal}</p>
<form method="post" action="/recommendation_detail">
{hidden}
{cards}
<button type="submit" formaction="/download_report">Download PDF report</button>
</form>
<p><a class="button" href="/">Start over</a></p>"#,
        name = escape(&profile.name),
        goal = escape(&profile.goal),
        hidden = hidden_inputs(&state),
    );
    layout("Results", &body)
}

/// POST /recommendation_detail
///
/// The selected record is re-encoded at index 0 for the detailed download.
pub fn detail_page(profile: &UserProfile, rec: &Recommendation) -> Html<String> {
    let mut state = encode_profile(profile);
    state.extend(encode_recommendation(0, rec));

    let body = format!(
        r#"<h1>{title}</h1>
<section class="card">
<p class="label">Overview</p>
<p>{overview}</p>
<p class="label">In-depth analysis</p>
<p>{details}</p>
</section>
<section class="card">
<p class="label">Advantages</p>
{pros}
<p class="label">Challenges</p>
{cons}
</section>
<section class="card">
{track}
</section>
<section class="card">
<p class="label">Learning resources</p>
{resources}
</section>
<form method="post" action="/download_detailed_report">
{hidden}
<button type="submit">Download detailed PDF</button>
</form>
<p><a class="button" href="/">Start over</a></p>"#,
        title = escape(&rec.title),
        overview = escape(&rec.overview),
        details = escape(&rec.details),
        pros = bullet_list(&rec.pros),
        cons = bullet_list(&rec.cons),
        track = track_details(&rec.track),
        resources = bullet_list(&rec.resources),
        hidden = hidden_inputs(&state),
    );
    layout(&rec.title, &body)
}

pub fn error_page(message: &str) -> Html<String> {
    let body = format!(
        r#"<section class="card error">
<h2>Something went wrong</h2>
<p>{message}</p>
<a class="button" href="/">Back to start</a>
</section>"#,
        message = escape(message),
    );
    layout("Error", &body)
}

fn tags(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="tag">{}</span>"#, escape(item)))
        .collect()
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "<p>None listed.</p>".to_string();
    }
    let entries: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul>{entries}</ul>")
}

fn track_summary(track: &Track) -> String {
    match track {
        Track::HigherStudies { institutions } => format!(
            r#"<p class="label">Top institutions</p><div>{}</div>"#,
            tags(institutions)
        ),
        Track::Career {
            salary_range,
            growth,
            ..
        } => format!(
            "<p><strong>Salary:</strong> {} · <strong>Growth:</strong> {}</p>",
            escape(salary_range),
            escape(growth)
        ),
    }
}

fn track_details(track: &Track) -> String {
    match track {
        Track::HigherStudies { institutions } => format!(
            r#"<p class="label">Recommended institutions</p>{}"#,
            bullet_list(institutions)
        ),
        Track::Career {
            companies,
            salary_range,
            growth,
            skills_needed,
        } => format!(
            r#"<p class="label">Industry insights</p>
<p><strong>Target companies:</strong></p><div>{companies}</div>
<p><strong>Skills needed:</strong></p><div>{skills}</div>
<p><strong>Expected salary:</strong> {salary}</p>
<p><strong>Growth potential:</strong> {growth}</p>"#,
            companies = tags(companies),
            skills = tags(skills_needed),
            salary = escape(salary_range),
            growth = escape(growth),
        ),
    }
}
