//! Bearer token validation.
//!
//! Tokens are HS256-signed JWTs issued by the external auth service; this
//! service only verifies them against the shared signing secret. The role
//! claim has two source locations in the wild: a direct `role` field and a
//! legacy `scopes` array whose first entry is the role.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use assets_core::error::CoreError;

/// JWT claims accepted from the auth service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the holder's username.
    pub sub: String,
    /// The holder's role name, when present directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Legacy role location: first entry of a scopes array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Resolve the effective role claim: `role` first, then the first
    /// `scopes` entry.
    ///
    /// Tokens carrying neither are rejected. The upstream service used to
    /// default these to ADMIN, which silently granted full access to any
    /// authenticated caller; that fallback is intentionally gone.
    pub fn resolve_role(&self) -> Result<&str, CoreError> {
        if let Some(role) = self.role.as_deref() {
            return Ok(role);
        }
        if let Some(scope) = self.scopes.as_ref().and_then(|s| s.first()) {
            return Ok(scope);
        }
        Err(CoreError::Unauthorized(
            "Token carries no role claim".into(),
        ))
    }
}

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the auth service.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self { secret }
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
