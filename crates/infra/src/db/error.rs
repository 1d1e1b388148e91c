use thiserror::Error;

/// Infrastructure failure while building or using database resources.
#[derive(Debug, Error)]
pub enum DbError {
    /// The assembled connection URL could not be parsed by the driver.
    #[error("invalid connection url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    /// Any other driver error (connect, begin, execute, commit, rollback).
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
