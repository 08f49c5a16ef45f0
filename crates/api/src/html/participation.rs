use chrono::{Datelike, NaiveDate};
use schedulesync_core::{
    dates::{first_of_month, format_month, next_month, previous_month, to_iso},
    views::{
        calendar::{month_weeks, WEEKDAY_HEADERS},
        participation::{
            ParticipationForm, CONFIRMATION_MESSAGE, CONFIRMATION_TITLE, SUBMITTING_LABEL,
        },
    },
};

use super::{alert, escape, layout};

/// The participation form with a day picker showing `month`.
///
/// Month navigation submits the form with `GET`, so the name and every
/// selected day ride along in the query string. Selected days outside the
/// shown month are kept as hidden fields. An off-screen copy of the submit
/// button comes first so pressing Enter submits instead of changing month.
pub fn participation_page(event_title: &str, form: &ParticipationForm, month: NaiveDate) -> String {
    let month = first_of_month(month);
    let action = format!("/event/{}", form.event_id());

    let header: String = WEEKDAY_HEADERS
        .iter()
        .map(|day| format!("<th>{}</th>", day))
        .collect();

    let weeks: String = month_weeks(month)
        .iter()
        .map(|week| {
            let cells: String = week
                .iter()
                .map(|day| match day {
                    Some(day) => format!(
                        r#"<td><label class="day"><input type="checkbox" name="dates" value="{iso}"{checked}><span>{num}</span></label></td>"#,
                        iso = to_iso(*day),
                        checked = if form.is_selected(*day) { " checked" } else { "" },
                        num = day.day(),
                    ),
                    None => "<td></td>".to_string(),
                })
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    let carried: String = form
        .selected_dates()
        .filter(|date| first_of_month(*date) != month)
        .map(|date| format!(r#"<input type="hidden" name="dates" value="{}">"#, to_iso(date)))
        .collect();

    let body = format!(
        r#"<h1>Select your availability</h1>
<p>{event_title}</p>
{alert}
<form id="participation-form" method="post" action="{action}" class="card">
  <button type="submit" data-submit class="implicit-submit" tabindex="-1" aria-hidden="true"{disabled}></button>
  <label for="name">Your name</label>
  <input type="text" id="name" name="name" value="{name}" required>
  <label>Select the days you are available</label>
  <div class="month-nav">
    <button type="submit" formmethod="get" formaction="{action}" formnovalidate name="month" value="{prev}">&lsaquo;</button>
    <strong>{month_label}</strong>
    <button type="submit" formmethod="get" formaction="{action}" formnovalidate name="month" value="{next}">&rsaquo;</button>
  </div>
  <table class="calendar">
    <thead><tr>{header}</tr></thead>
    <tbody>{weeks}</tbody>
  </table>
  {carried}
  <button type="submit" data-submit id="submit-availability" class="primary"{disabled}>{submit_label}</button>
</form>
<script>
(function () {{
  var form = document.getElementById("participation-form");
  var name = document.getElementById("name");
  var submit = document.getElementById("submit-availability");
  var buttons = form.querySelectorAll("button[data-submit]");
  function setDisabled(disabled) {{
    buttons.forEach(function (button) {{ button.disabled = disabled; }});
  }}
  function refresh() {{
    var selected = form.querySelectorAll('input[name="dates"]:checked, input[type="hidden"][name="dates"]').length;
    setDisabled(selected === 0 || name.value.trim() === "");
  }}
  form.addEventListener("change", refresh);
  name.addEventListener("input", refresh);
  form.addEventListener("submit", function (event) {{
    if (event.submitter && event.submitter.name === "month") {{
      return;
    }}
    if (submit.disabled) {{
      event.preventDefault();
      return;
    }}
    setDisabled(true);
    submit.textContent = "{submitting_label}";
  }});
}})();
</script>"#,
        event_title = escape(event_title),
        alert = alert(form.error()),
        name = escape(form.name()),
        prev = format_month(previous_month(month)),
        next = format_month(next_month(month)),
        month_label = month.format("%B %Y"),
        disabled = if form.can_submit() { "" } else { " disabled" },
        submit_label = form.submit_label(),
        submitting_label = SUBMITTING_LABEL,
    );

    layout("Select your availability", &body)
}

/// Terminal view after a successful submission.
pub fn confirmation_page() -> String {
    layout(
        CONFIRMATION_TITLE,
        &format!(
            r#"<div class="card" style="text-align:center"><h2>{}</h2><p>{}</p></div>"#,
            CONFIRMATION_TITLE, CONFIRMATION_MESSAGE
        ),
    )
}
