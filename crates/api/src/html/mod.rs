//! # HTML Rendering
//!
//! Server-side markup for the three pages. Every user-supplied string goes
//! through [`escape`] before it reaches the page.

pub mod dashboard;
pub mod event;
pub mod participation;

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
nav { background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.05); padding: 1rem 2rem; }
nav a { color: #4f46e5; font-size: 1.25rem; font-weight: 600; text-decoration: none; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem; }
.card { background: #fff; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 1.5rem; }
.alert { background: #fef2f2; color: #991b1b; border-radius: .375rem; padding: .75rem 1rem; margin-bottom: 1rem; }
label { display: block; font-size: .875rem; font-weight: 500; margin: 1rem 0 .25rem; }
input[type=text], textarea { width: 100%; box-sizing: border-box; padding: .5rem; border: 1px solid #d1d5db; border-radius: .375rem; }
button { padding: .5rem 1rem; border-radius: .375rem; border: 1px solid #d1d5db; background: #fff; cursor: pointer; }
button.primary { background: #4f46e5; color: #fff; border-color: transparent; width: 100%; margin-top: 1.5rem; }
button:disabled { opacity: .5; cursor: not-allowed; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: .75rem 1.5rem; border-bottom: 1px solid #e5e7eb; vertical-align: top; }
ul { margin: 0; padding-left: 1rem; }
.muted { color: #9ca3af; }
.calendar td { padding: .25rem; text-align: center; border: none; }
.calendar .day input { display: none; }
.calendar .day span { display: inline-block; width: 2.25rem; line-height: 2.25rem; border-radius: 100%; cursor: pointer; }
.calendar .day input:checked + span { background: #4f46e5; color: #fff; }
.month-nav { display: flex; justify-content: space-between; align-items: center; }
.implicit-submit { position: absolute; left: -9999px; width: 1px; height: 1px; overflow: hidden; }
"#;

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps page content in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · ScheduleSync</title>
<style>{STYLES}</style>
</head>
<body>
<nav><a href="/">ScheduleSync</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Failure banner shown above a form.
pub fn alert(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<div class="alert" role="alert">{}</div>"#, escape(m)))
        .unwrap_or_default()
}

/// Terminal view for an event id that does not resolve.
pub fn not_found_page() -> String {
    layout(
        schedulesync_core::views::dashboard::NOT_FOUND_TITLE,
        &format!(
            r#"<div class="card" style="text-align:center"><h2>{}</h2></div>"#,
            schedulesync_core::views::dashboard::NOT_FOUND_TITLE
        ),
    )
}

/// Terminal view for a read that failed.
pub fn load_failed_page() -> String {
    layout(
        "Error",
        &format!(
            r#"<div class="card" style="text-align:center">{}</div>"#,
            alert(Some(schedulesync_core::views::dashboard::LOAD_FAILED_MESSAGE))
        ),
    )
}
