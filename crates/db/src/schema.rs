use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create events table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT events_title_not_blank CHECK (length(trim(title)) > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create participants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS participants (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            event_id UUID NOT NULL REFERENCES events(id),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT participants_name_not_blank CHECK (length(trim(name)) > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            participant_id UUID NOT NULL REFERENCES participants(id),
            date DATE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_participants_event_id ON participants(event_id)",
        "CREATE INDEX IF NOT EXISTS idx_availability_participant_id ON availability(participant_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully");
    Ok(())
}
