use std::sync::Arc;

use greeter_core::hello::CreateHelloMessage;
use greeter_core::validation::Validator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Collaborators are injected here once at startup; handlers never look
/// them up globally.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Request validator with the configured message catalog.
    pub validator: Arc<Validator>,
    /// Greeting use case invoked by `POST /v1/hello`.
    pub create_hello_message: Arc<dyn CreateHelloMessage>,
}
