use crate::models::{DbParticipant, DbParticipantDate};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_participant(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    name: &str,
) -> Result<DbParticipant> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let participant = sqlx::query_as::<_, DbParticipant>(
        r#"
        INSERT INTO participants (id, event_id, name, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, event_id, name, created_at
        "#,
    )
    .bind(id)
    .bind(event_id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(participant)
}

/// Every participant of an event joined with its availability rows.
///
/// Participants without availability appear once with a `NULL` date. Rows
/// come back in participant creation order, dates ascending within each.
pub async fn get_participant_dates_by_event_id(
    pool: &Pool<Postgres>,
    event_id: Uuid,
) -> Result<Vec<DbParticipantDate>> {
    let rows = sqlx::query_as::<_, DbParticipantDate>(
        r#"
        SELECT p.id AS participant_id, p.name, a.date
        FROM participants p
        LEFT JOIN availability a ON a.participant_id = p.id
        WHERE p.event_id = $1
        ORDER BY p.created_at ASC, p.id ASC, a.date ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
