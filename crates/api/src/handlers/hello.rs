//! Handler for the `/hello` resource.
//!
//! The request runs through a fixed, linear pipeline: read the body,
//! validate it against [`POST_HELLO_RULES`], decode it into
//! [`PostHelloRequest`], invoke the greeting use case. Every failure is
//! terminal and mapped to a response by [`AppError`].

use std::sync::LazyLock;

use axum::body::Body;
use axum::extract::State;
use axum::Json;
use greeter_core::hello::CreateHelloMessageRequest;
use greeter_core::validation::{Rule, RuleSet};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// JSON body accepted by `POST /v1/hello`.
#[derive(Debug, Deserialize)]
pub struct PostHelloRequest {
    pub name: String,
}

/// JSON body returned by `POST /v1/hello` on success.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelloMessageResponse {
    pub message: String,
}

/// Field rules for [`PostHelloRequest`].
pub static POST_HELLO_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::new().field("name", [Rule::Required]));

/// POST /v1/hello
///
/// Returns 200 with the greeting, 400 with `{"errors": {...}}` when a field
/// rule fails, and 500 for unreadable bodies, malformed JSON, decode
/// failures and use case errors.
pub async fn post_hello(
    State(state): State<AppState>,
    body: Body,
) -> AppResult<Json<HelloMessageResponse>> {
    let raw = axum::body::to_bytes(body, state.config.max_body_bytes).await?;

    state.validator.validate(&raw, &POST_HELLO_RULES)?;

    let request: PostHelloRequest = serde_json::from_slice(&raw).map_err(AppError::Decode)?;

    let response = state
        .create_hello_message
        .execute(CreateHelloMessageRequest { name: request.name })
        .await?;

    tracing::debug!(message = %response.message, "Created hello message");

    Ok(Json(HelloMessageResponse {
        message: response.message,
    }))
}
