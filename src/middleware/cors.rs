// CORS configuration

use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// The form and the API are same-origin in production; the permissive origin
/// here keeps local development against a separately served page working.
pub fn apply_cors(router: Router) -> Router {
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
    )
}
