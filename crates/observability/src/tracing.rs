//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Workspace crates logged at `debug` unless `RUST_LOG` says otherwise.
pub const SERVICE_TARGETS: &[&str] = &[
    "shopfront_api",
    "shopfront_products",
    "shopfront_infra",
    "tower_http",
];

/// Directives used when `RUST_LOG` is unset or unparsable: `info` globally,
/// `debug` for [`SERVICE_TARGETS`].
pub fn default_directives() -> String {
    std::iter::once("info".to_string())
        .chain(SERVICE_TARGETS.iter().map(|t| format!("{t}=debug")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives()));

    // JSON lines; targets stay on so per-crate filtering is visible.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        ::tracing::info!("still alive after double init");
    }

    #[test]
    fn default_directives_cover_service_crates() {
        assert_eq!(
            default_directives(),
            "info,shopfront_api=debug,shopfront_products=debug,shopfront_infra=debug,tower_http=debug"
        );
        assert!(default_directives().parse::<EnvFilter>().is_ok());
    }
}
