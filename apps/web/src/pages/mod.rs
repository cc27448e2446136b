//! Server-rendered HTML pages.
//!
//! Pages are plain strings built with `format!`. Every user- or model-supplied
//! value goes through `escape` before interpolation.

pub mod views;

use axum::response::Html;

use crate::form_state::EncodedFields;

pub use views::{detail_page, error_page, index_page, loading_page, results_page};

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders fields as `<input type="hidden">` elements.
pub fn hidden_inputs(fields: &EncodedFields) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                escape(name),
                escape(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const STYLE: &str = r#"
body { font-family: 'Helvetica', 'Arial', sans-serif; color: #333; line-height: 1.5; margin: 0; background: #f5f7fb; }
main { max-width: 960px; margin: 0 auto; padding: 32px 16px; }
h1, h2, h3 { color: #4361ee; }
.card { background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; padding: 20px; margin-bottom: 20px; }
.label { font-weight: bold; color: #3f37c9; text-transform: uppercase; font-size: 0.8em; letter-spacing: 1px; }
.tag { background: #e9ecef; padding: 3px 10px; border-radius: 15px; font-size: 0.85em; display: inline-block; margin: 0 5px 5px 0; }
.error { border-left: 5px solid #f72585; }
form.profile label { display: block; margin-top: 12px; font-weight: bold; }
form.profile input, form.profile select, form.profile textarea { width: 100%; padding: 8px; box-sizing: border-box; }
button { background: #4361ee; color: #fff; border: 0; border-radius: 6px; padding: 10px 18px; margin: 8px 8px 0 0; cursor: pointer; }
a.button { display: inline-block; background: #4361ee; color: #fff; border-radius: 6px; padding: 10px 18px; text-decoration: none; }
"#;

/// Wraps page content in the shared document shell.
pub fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Career Compass</title>
<style>{STYLE}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    ))
}
