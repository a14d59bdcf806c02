//! Session token issuing and verification for bearer auth.

use crate::api::handlers::now_unix_seconds;
use anyhow::{Context, Result};
use axum::http::{HeaderMap, header::AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use session_token::{Error as TokenError, SessionTokenClaims, sign_hs256, verify_hs256};
use uuid::Uuid;

/// Signs and verifies session tokens with the process-wide secret.
///
/// The secret is loaded once at startup and never mutated at runtime.
pub struct SessionSigner {
    secret: SecretString,
    ttl_seconds: i64,
}

impl SessionSigner {
    #[must_use]
    pub fn new(secret: SecretString, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    /// Mint a token for a freshly authenticated user.
    ///
    /// # Errors
    /// Returns an error if the claims cannot be encoded or signed.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String> {
        let iat = now_unix_seconds();
        let claims = SessionTokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl_seconds),
        };
        sign_hs256(self.secret.expose_secret().as_bytes(), &claims)
            .context("failed to sign session token")
    }

    /// Verify a presented token against the signing secret and current time.
    ///
    /// # Errors
    /// Returns an error if the token is malformed, forged, or expired.
    pub fn verify(&self, token: &str) -> Result<SessionTokenClaims, TokenError> {
        verify_hs256(
            token,
            self.secret.expose_secret().as_bytes(),
            now_unix_seconds(),
        )
    }
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("secret", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn signer() -> SessionSigner {
        SessionSigner::new(SecretString::from("sekreta".to_string()), 3600)
    }

    #[test]
    fn issue_then_verify_round_trips() -> Result<()> {
        let signer = signer();
        let user_id = Uuid::new_v4();
        let token = signer.issue(user_id, "alice@example.com")?;

        let claims = signer.verify(&token)?;
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
        Ok(())
    }

    #[test]
    fn zero_ttl_tokens_are_already_expired() -> Result<()> {
        let signer = SessionSigner::new(SecretString::from("sekreta".to_string()), 0);
        let token = signer.issue(Uuid::new_v4(), "alice@example.com")?;
        assert!(matches!(signer.verify(&token), Err(TokenError::Expired)));
        Ok(())
    }

    #[test]
    fn verify_rejects_other_signer() -> Result<()> {
        let token = signer().issue(Uuid::new_v4(), "alice@example.com")?;
        let other = SessionSigner::new(SecretString::from("alia".to_string()), 3600);
        assert!(other.verify(&token).is_err());
        Ok(())
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", signer());
        assert!(!rendered.contains("sekreta"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn extract_bearer_token_variants() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(
            extract_bearer_token(&headers),
            Some("abc.def.ghi".to_string())
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer xyz"));
        assert_eq!(extract_bearer_token(&headers), Some("xyz".to_string()));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
