//! Application state for the panel server

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state.
///
/// The pool is the single process-wide database handle; it is created once
/// at startup and closed on shutdown.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Secret for signing session tokens
    pub session_secret: String,
}

impl AppState {
    /// Connect the pool, run migrations and seed bootstrap data.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        db::seed::run(&pool).await?;

        Ok(Self {
            pool,
            session_secret: config.session_secret.clone(),
        })
    }

    /// Close the pool, waiting for in-flight connections to finish.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
