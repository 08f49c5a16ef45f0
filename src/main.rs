use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use schedulesync_api::config::ApiConfig;
use schedulesync_db::{
    create_pool, memory::InMemoryStore, postgres::PgStore, schema::initialize_database,
    store::SchedulingStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    let store: Arc<dyn SchedulingStore> = if config.uses_memory_store() {
        Arc::new(InMemoryStore::new())
    } else {
        // Create database connection pool
        let db_pool = create_pool(&config.database_url).await?;

        // Initialize database schema
        initialize_database(&db_pool).await?;

        Arc::new(PgStore::new(db_pool))
    };

    // Start server
    schedulesync_api::start_server(config, store).await?;

    Ok(())
}
