pub mod health;
pub mod hello;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                                           create greeting (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(hello::router())
}
