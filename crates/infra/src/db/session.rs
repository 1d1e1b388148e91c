//! Session factory: explicitly-committed units of database work.
//!
//! A [`Session`] never autocommits. The first statement opens a transaction;
//! it stays open until the caller runs [`Session::commit`]. [`Session::close`]
//! (or dropping the session) rolls back anything left uncommitted and returns
//! the connection to the pool.

use sqlx::{PgPool, Postgres, Transaction};

use super::error::DbError;

/// Produces [`Session`]s bound to a shared pool.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    pool: PgPool,
}

impl SessionFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a new session. No connection is checked out until it is used.
    pub fn session(&self) -> Session {
        Session {
            pool: self.pool.clone(),
            tx: None,
        }
    }
}

/// A scoped unit of work. Callers must `commit` and then `close`.
pub struct Session {
    pool: PgPool,
    tx: Option<Transaction<'static, Postgres>>,
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("in_transaction", &self.in_transaction())
            .finish()
    }
}

impl Session {
    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }

    /// The open transaction, beginning one on first use.
    pub async fn transaction(&mut self) -> Result<&mut Transaction<'static, Postgres>, DbError> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => {
                tracing::trace!("session: begin");
                self.pool.begin().await?
            }
        };
        Ok(self.tx.insert(tx))
    }

    /// Run a statement inside the session's transaction. Returns rows affected.
    pub async fn execute(&mut self, sql: &str) -> Result<u64, DbError> {
        let tx = self.transaction().await?;
        let result = sqlx::query(sql).execute(&mut **tx).await?;
        Ok(result.rows_affected())
    }

    /// Commit the open transaction, if any. The next statement starts a new one.
    pub async fn commit(&mut self) -> Result<(), DbError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            tracing::trace!("session: commit");
        }
        Ok(())
    }

    /// Discard uncommitted work, keeping the session usable.
    pub async fn rollback(&mut self) -> Result<(), DbError> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
            tracing::trace!("session: rollback");
        }
        Ok(())
    }

    /// End the session, rolling back anything not committed.
    pub async fn close(mut self) -> Result<(), DbError> {
        self.rollback().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{PoolSettings, create_pool};
    use crate::db::settings::DatabaseSettings;

    fn lazy_factory() -> SessionFactory {
        let url = DatabaseSettings {
            user: Some("u".into()),
            password: Some("p".into()),
            host: Some("127.0.0.1".into()),
            port: Some("5432".into()),
            name: Some("db".into()),
        }
        .connection_url();
        SessionFactory::new(create_pool(&url, &PoolSettings::default()).unwrap())
    }

    #[tokio::test]
    async fn new_session_has_no_open_transaction() {
        let session = lazy_factory().session();
        assert!(!session.in_transaction());
    }

    #[tokio::test]
    async fn commit_and_close_without_work_never_connect() {
        let factory = lazy_factory();
        let mut session = factory.session();

        session.commit().await.unwrap();
        session.close().await.unwrap();
        assert_eq!(factory.pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn uncommitted_work_is_rolled_back_on_close() {
        let raw = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&raw).await.expect("pool creation failed");
        let factory = SessionFactory::new(pool.clone());

        let mut setup = factory.session();
        setup
            .execute("CREATE TABLE IF NOT EXISTS session_rollback_check (n INT)")
            .await
            .unwrap();
        setup.execute("DELETE FROM session_rollback_check").await.unwrap();
        setup.commit().await.unwrap();
        setup.close().await.unwrap();

        let mut session = factory.session();
        session.execute("INSERT INTO session_rollback_check VALUES (1)").await.unwrap();
        assert!(session.in_transaction());
        session.close().await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM session_rollback_check")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
