//! Domain logic for the greeter service.
//!
//! Holds the declarative request validation engine and the business
//! operations the HTTP layer delegates to. Nothing here knows about HTTP.

pub mod error;
pub mod hello;
pub mod validation;
