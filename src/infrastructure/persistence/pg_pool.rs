use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::application::ports::AuditStoreError;

#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, AuditStoreError> {
    let mut retries = 5;
    let mut delay = Duration::from_millis(500);

    loop {
        match PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
        {
            Ok(pool) => {
                info!("PostgreSQL connection pool established");
                return Ok(pool);
            }
            Err(e) if retries > 0 => {
                retries -= 1;
                warn!(
                    error = %e,
                    retries_left = retries,
                    delay_ms = delay.as_millis(),
                    "PostgreSQL connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(AuditStoreError::ConnectionFailed(e.to_string()));
            }
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AuditStoreError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AuditStoreError::ConnectionFailed(format!("migrations: {}", e)))?;
    info!("Database migrations applied");
    Ok(())
}
