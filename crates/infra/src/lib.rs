//! Infrastructure layer: database connection setup and configuration loading.
//!
//! Nothing in the HTTP layer depends on this crate; it is ready for persistence
//! code that does not exist yet.

pub mod db;
