//! Runtime configuration and shared state for auth handlers.

use super::session::SessionSigner;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    frontend_base_url: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(frontend_base_url: String) -> Self {
        Self { frontend_base_url }
    }

    #[must_use]
    pub fn frontend_base_url(&self) -> &str {
        &self.frontend_base_url
    }
}

/// Shared auth state attached to the router as an extension.
#[derive(Debug)]
pub struct AuthState {
    config: AuthConfig,
    signer: SessionSigner,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig, signer: SessionSigner) -> Self {
        Self { config, signer }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn signer(&self) -> &SessionSigner {
        &self.signer
    }
}
