use anyhow::{Context, Result};
use approute::{Config, Renderer};
use approute_server::{pages, router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let mut config = Config::load_default().context("Failed to load approute.toml")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Ok(port) = std::env::var("PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(_) => warn!(%port, "ignoring invalid PORT"),
        }
    }

    let routes = pages::routes().context("Invalid route table")?;
    info!(routes = routes.patterns().len(), "route table built");
    for pattern in routes.patterns() {
        info!("  {} -> page", pattern);
    }

    let renderer = Renderer::from_config(routes, &config.routing);
    if let Some(base) = renderer.base_path() {
        info!(base, "serving below base path");
    }
    let app = router(renderer);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
