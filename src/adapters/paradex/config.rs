//! Paradex Configuration
//!
//! Credentials and environment selection for a Paradex adapter.

use std::fmt;

use crate::error::{AppError, Result};

/// Environment tag used when none is given
pub const DEFAULT_ENV: &str = "prod";

// =============================================================================
// Test Constants (well-known Starknet test keys - PUBLIC, DO NOT USE IN PROD)
// =============================================================================

/// Test private key for Starknet signing (well-known public test key)
#[cfg(test)]
pub const TEST_PRIVATE_KEY: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000001";

/// Test account address
#[cfg(test)]
pub const TEST_ACCOUNT_ADDRESS: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000001";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a Paradex adapter
///
/// Held for the adapter's lifetime and never persisted. `Debug` output
/// redacts the private key and bearer token.
#[derive(Clone)]
pub struct ParadexConfig {
    /// Account address on Starknet (hex string with 0x prefix)
    pub account_address: String,
    /// Starknet private key (hex string with 0x prefix)
    pub private_key: String,
    /// Environment tag handed to the venue client unchanged ("prod", "testnet", ...)
    pub env: String,
    /// Pre-issued JWT for private REST endpoints
    pub jwt_token: Option<String>,
    /// Override for the REST base URL
    pub rest_url: Option<String>,
}

impl ParadexConfig {
    /// Credentials bound to the production environment
    pub fn new(account_address: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            account_address: account_address.into(),
            private_key: private_key.into(),
            env: DEFAULT_ENV.to_string(),
            jwt_token: None,
            rest_url: None,
        }
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn with_jwt(mut self, jwt: impl Into<String>) -> Self {
        self.jwt_token = Some(jwt.into());
        self
    }

    pub fn with_rest_url(mut self, url: impl Into<String>) -> Self {
        self.rest_url = Some(url.into());
        self
    }

    /// Create configuration from environment variables
    ///
    /// - `PARADEX_ACCOUNT_ADDRESS` (required)
    /// - `PARADEX_PRIVATE_KEY` (required)
    /// - `PARADEX_ENV` (default "prod")
    /// - `PARADEX_JWT` (optional)
    /// - `PARADEX_REST_URL` (optional)
    pub fn from_env() -> Result<Self> {
        let account_address = required_var("PARADEX_ACCOUNT_ADDRESS")?;
        let private_key = required_var("PARADEX_PRIVATE_KEY")?;
        let env = optional_var("PARADEX_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string());

        Ok(Self {
            account_address,
            private_key,
            env,
            jwt_token: optional_var("PARADEX_JWT"),
            rest_url: optional_var("PARADEX_REST_URL"),
        })
    }

    /// REST base URL: explicit override, else `https://api.{env}.paradex.trade/v1`
    pub fn rest_base_url(&self) -> String {
        match &self.rest_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://api.{}.paradex.trade/v1", self.env),
        }
    }

    /// Starknet chain ID used in order signatures
    pub fn chain_id(&self) -> &'static str {
        if self.env == DEFAULT_ENV {
            "PRIVATE_SN_PARACLEAR_MAINNET"
        } else {
            "PRIVATE_SN_POTC_SEPOLIA"
        }
    }
}

impl fmt::Debug for ParadexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParadexConfig")
            .field("account_address", &self.account_address)
            .field("private_key", &"***")
            .field("env", &self.env)
            .field("jwt_token", &self.jwt_token.as_ref().map(|_| "***"))
            .field("rest_url", &self.rest_url)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    optional_var(name).ok_or_else(|| AppError::Config(format!("{} not set", name)))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
