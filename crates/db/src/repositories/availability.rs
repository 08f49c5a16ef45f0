use crate::models::DbAvailability;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts one availability row per date in a single statement.
pub async fn create_availability(
    pool: &Pool<Postgres>,
    participant_id: Uuid,
    dates: &[NaiveDate],
) -> Result<Vec<DbAvailability>> {
    if dates.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, DbAvailability>(
        r#"
        INSERT INTO availability (participant_id, date)
        SELECT $1, d FROM UNNEST($2::date[]) AS d
        RETURNING participant_id, date
        "#,
    )
    .bind(participant_id)
    .bind(dates)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
