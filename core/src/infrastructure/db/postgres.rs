use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info, log::LevelFilter};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations before handing out the pool.
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(20)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("database migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
