//! Greeting message use case.
//!
//! The HTTP layer depends only on the [`CreateHelloMessage`] trait; which
//! implementation runs is decided when the application state is assembled.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Prefix prepended to the caller's name.
pub const GREETING_PREFIX: &str = "Hello!";

/// Input to [`CreateHelloMessage::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHelloMessageRequest {
    pub name: String,
}

/// Output of [`CreateHelloMessage::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHelloMessageResponse {
    pub message: String,
}

/// Builds a greeting for a validated request.
#[async_trait]
pub trait CreateHelloMessage: Send + Sync {
    async fn execute(
        &self,
        request: CreateHelloMessageRequest,
    ) -> Result<CreateHelloMessageResponse, CoreError>;
}

/// Default [`CreateHelloMessage`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloMessageInteractor;

#[async_trait]
impl CreateHelloMessage for HelloMessageInteractor {
    async fn execute(
        &self,
        request: CreateHelloMessageRequest,
    ) -> Result<CreateHelloMessageResponse, CoreError> {
        Ok(CreateHelloMessageResponse {
            message: format!("{GREETING_PREFIX}{}", request.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greets_by_name() {
        let response = HelloMessageInteractor
            .execute(CreateHelloMessageRequest {
                name: "Taro".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.message, "Hello!Taro");
    }

    #[test]
    fn response_survives_json_round_trip() {
        let response = CreateHelloMessageResponse {
            message: "Hello!花子".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Hello!花子"}"#);
        let back: CreateHelloMessageResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
