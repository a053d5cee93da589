use axum::routing::post;
use axum::Router;

use crate::handlers::hello;
use crate::state::AppState;

/// Routes mounted under `/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/hello", post(hello::post_hello))
}
