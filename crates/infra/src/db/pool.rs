//! Database connection pool management.
//!
//! Uses sqlx `PgPool` with explicit connection limits. The pool connects lazily,
//! so building it never touches the network.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::error::DbError;
use super::settings::ConnectionUrl;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Create a lazily-connecting PostgreSQL pool bound to `url`.
///
/// # Errors
///
/// Returns [`DbError::InvalidUrl`] if the driver cannot parse the URL (for
/// example when `DB_PORT` was unset and rendered as `None`).
///
/// Must be called inside a Tokio runtime.
pub fn create_pool(url: &ConnectionUrl, settings: &PoolSettings) -> Result<PgPool, DbError> {
    tracing::debug!(
        url = url.redacted(),
        max_connections = settings.max_connections,
        "creating postgres pool"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_lazy(url.as_str())
        .map_err(|source| DbError::InvalidUrl {
            url: url.redacted().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::settings::DatabaseSettings;

    #[tokio::test]
    async fn respects_max_connections() {
        let url = DatabaseSettings {
            user: Some("u".into()),
            password: Some("p".into()),
            host: Some("localhost".into()),
            port: Some("5432".into()),
            name: Some("db".into()),
        }
        .connection_url();

        let pool = create_pool(&url, &PoolSettings { max_connections: 2 }).unwrap();
        assert_eq!(pool.options().get_max_connections(), 2);
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let raw = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new().connect(&raw).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
