//! Request/response types for auth endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SetPrivatePasswordRequest {
    pub password: String,
    pub confirm: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ValidatePrivatePasswordRequest {
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ValidatePrivatePasswordResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn register_request_round_trips() -> Result<()> {
        let request = RegisterRequest {
            name: "Alice Liddell".to_string(),
            email: "alice@example.com".to_string(),
            password: "Str0ng-Enough!".to_string(),
        };
        let value = serde_json::to_value(&request)?;
        let email = value
            .get("email")
            .and_then(serde_json::Value::as_str)
            .context("missing email")?;
        assert_eq!(email, "alice@example.com");
        let decoded: RegisterRequest = serde_json::from_value(value)?;
        assert_eq!(decoded.name, "Alice Liddell");
        Ok(())
    }

    #[test]
    fn validate_response_omits_absent_message() -> Result<()> {
        let response = ValidatePrivatePasswordResponse {
            valid: true,
            message: None,
        };
        let value = serde_json::to_value(&response)?;
        assert!(value.get("message").is_none());
        assert_eq!(value.get("valid"), Some(&serde_json::Value::Bool(true)));
        Ok(())
    }

    #[test]
    fn validate_response_keeps_reason() -> Result<()> {
        let response = ValidatePrivatePasswordResponse {
            valid: false,
            message: Some("No private password set".to_string()),
        };
        let value = serde_json::to_value(&response)?;
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .context("missing message")?;
        assert_eq!(message, "No private password set");
        Ok(())
    }
}
