use crate::api::{
    self,
    handlers::auth::{AuthConfig, AuthState, SessionSigner},
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub session_secret: SecretString,
    pub session_ttl_seconds: i64,
    pub frontend_base_url: String,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let config = AuthConfig::new(args.frontend_base_url);
    let signer = SessionSigner::new(args.session_secret, args.session_ttl_seconds);
    let auth_state = Arc::new(AuthState::new(config, signer));

    api::new(args.port, args.dsn, auth_state).await
}
