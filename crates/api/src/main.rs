use anyhow::Context;

use shopfront_api::config::ApiConfig;
use shopfront_products::ProductCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = ApiConfig::from_env().context("invalid API configuration")?;
    let app = shopfront_api::app::build_app(ProductCatalog::seeded());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited with error")?;
    Ok(())
}
