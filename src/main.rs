use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use valor_etl::routes::create_router;
use valor_etl::storage::S3Store;
use valor_etl::utils::logger;
use valor_etl::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing (console + daily log file)
    logger::init_logging(&config.log);
    info!("Configuration loaded: {:?}", config.server);

    // Build the object store client once; every handler shares it
    let store = Arc::new(S3Store::new(&config.storage)?);

    let state = AppState {
        config: config.clone(),
        store,
    };

    let app = create_router(state);

    let addr = (config.server.host.as_str(), config.server.port);
    info!("Server listening on {}:{}", addr.0, addr.1);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
