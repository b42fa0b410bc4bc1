//! HTTP routes
//!
//! - `/` - landing page with the upload form
//! - `/upload` - multipart CSV upload
//! - `/api/health` - health check

pub mod health;
pub mod ui;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(upload::router(state))
        .merge(ui::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http());

    apply_cors(router)
}
