//! `DB_*` environment values and the Postgres URL built from them.

use core::fmt;

pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";

/// Text substituted for any value that is not set.
const MISSING: &str = "None";

/// Load a local `.env` file into the process environment.
///
/// A missing or unreadable file is ignored; variables already set win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("failed to load .env: {e}"),
    }
}

/// Raw connection values. None of them is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub name: Option<String>,
}

impl DatabaseSettings {
    /// Read `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (tests use this to avoid the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            user: lookup(DB_USER),
            password: lookup(DB_PASSWORD),
            host: lookup(DB_HOST),
            port: lookup(DB_PORT),
            name: lookup(DB_NAME),
        }
    }

    /// `postgresql://<user>:<password>@<host>:<port>/<name>`, verbatim.
    ///
    /// Values are not escaped. An unset value is rendered as `None`.
    pub fn connection_url(&self) -> ConnectionUrl {
        fn part(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or(MISSING)
        }

        ConnectionUrl {
            raw: format!(
                "postgresql://{}:{}@{}:{}/{}",
                part(&self.user),
                part(&self.password),
                part(&self.host),
                part(&self.port),
                part(&self.name),
            ),
            redacted: format!(
                "postgresql://{}:***@{}:{}/{}",
                part(&self.user),
                part(&self.host),
                part(&self.port),
                part(&self.name),
            ),
        }
    }
}

/// A Postgres connection string.
///
/// `Display` prints the real URL (password included); use
/// [`redacted`](Self::redacted) for logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUrl {
    raw: String,
    redacted: String,
}

impl ConnectionUrl {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn redacted(&self) -> &str {
        &self.redacted
    }
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUrl").field(&self.redacted).finish()
    }
}
