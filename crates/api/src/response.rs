//! Shared response envelope types for API handlers.
//!
//! Success payloads are endpoint-specific and serialized directly; the
//! envelopes here cover shapes shared across endpoints.

use greeter_core::validation::FieldErrorMap;
use serde::Serialize;

/// `{ "errors": { <field>: <message>, ... } }` body of a 400 response.
#[derive(Debug, Serialize)]
pub struct FieldErrorsResponse {
    pub errors: FieldErrorMap,
}
