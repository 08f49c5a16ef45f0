use schedulesync_core::views::{
    dashboard::{DashboardSummary, EMPTY_STATE_MESSAGE, NO_DATES_PLACEHOLDER},
    share::{COPIED_LABEL, COPY_FEEDBACK_MILLIS, SHARE_LABEL},
};

use super::{escape, layout};

pub fn dashboard_page(summary: &DashboardSummary) -> String {
    let description = summary
        .description
        .as_deref()
        .map(|d| format!("<p>{}</p>", escape(d)))
        .unwrap_or_default();

    let participants = if summary.is_empty() {
        format!(r#"<p id="empty-state">{}</p>"#, EMPTY_STATE_MESSAGE)
    } else {
        let rows: String = summary
            .rows
            .iter()
            .map(|row| {
                let dates = if row.has_dates() {
                    let items: String = row
                        .dates
                        .iter()
                        .map(|date| format!("<li>{}</li>", escape(date)))
                        .collect();
                    format!("<ul>{}</ul>", items)
                } else {
                    format!(r#"<span class="muted">{}</span>"#, NO_DATES_PLACEHOLDER)
                };
                format!(
                    r#"<tr data-participant="{id}"><td>{name}</td><td>{dates}</td></tr>"#,
                    id = row.participant_id,
                    name = escape(&row.name),
                )
            })
            .collect();

        format!(
            r#"<table>
<thead><tr><th>Name</th><th>Available Dates</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };

    let body = format!(
        r#"<div class="card">
  <div class="month-nav">
    <div>
      <h1>{title}</h1>
      {description}
    </div>
    <button type="button" id="share-link" data-url="{share_url}">{share_label}</button>
  </div>
  <h2 id="participant-count">{header}</h2>
  {participants}
</div>
<script>
document.getElementById("share-link").addEventListener("click", function () {{
  var button = this;
  navigator.clipboard.writeText(button.dataset.url);
  button.textContent = "{copied_label}";
  setTimeout(function () {{ button.textContent = "{share_label}"; }}, {feedback_millis});
}});
</script>"#,
        title = escape(&summary.title),
        share_url = escape(&summary.share_url),
        share_label = SHARE_LABEL,
        copied_label = COPIED_LABEL,
        feedback_millis = COPY_FEEDBACK_MILLIS,
        header = summary.header(),
    );

    layout(&summary.title, &body)
}
