use jeepney_server::catalog::{CatalogLoader, CatalogLoaderConfig, CatalogStore};
use jeepney_server::settings::Settings;
use jeepney_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid settings");
            std::process::exit(2);
        }
    };

    // Load the route catalog (fail fast if unavailable)
    let loader = CatalogLoader::new(CatalogLoaderConfig::new(settings.routes_source.clone()))
        .expect("Failed to create catalog loader");
    let catalog = CatalogStore::load(loader)
        .await
        .expect("Failed to load route catalog");

    // Spawn background task to reload the catalog periodically
    if let Some(period) = settings.reload_interval {
        let catalog_reload = catalog.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match catalog_reload.reload().await {
                    Ok(catalog) => info!(routes = catalog.len(), "Scheduled catalog reload done"),
                    Err(e) => warn!(error = %e, "Scheduled catalog reload failed, keeping previous"),
                }
            }
        });
    }

    let state = AppState::new(catalog, settings.planner);
    let app = create_router(state, settings.static_dir.as_deref());

    let addr = settings.addr;
    info!(%addr, "Jeepney route matcher listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /routes          - Loaded routes");
    info!("  GET  /route           - Plan a journey (?start=lat,lng&end=lat,lng)");
    info!("  POST /catalog/reload  - Reload the route catalog");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
