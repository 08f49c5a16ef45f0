use super::{alert, escape, layout};

pub const CREATE_FAILED_MESSAGE: &str = "Failed to create event. Please try again.";

/// The event creator form, pre-filled with whatever was last entered.
pub fn event_creator_page(title: &str, description: &str, error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Create an event</h1>
{alert}
<form method="post" action="/" class="card">
  <label for="title">Title</label>
  <input type="text" id="title" name="title" value="{title}" required>
  <label for="description">Description</label>
  <textarea id="description" name="description" rows="3">{description}</textarea>
  <button type="submit" class="primary">Create Event</button>
</form>"#,
        alert = alert(error),
        title = escape(title),
        description = escape(description),
    );

    layout("Create an event", &body)
}
