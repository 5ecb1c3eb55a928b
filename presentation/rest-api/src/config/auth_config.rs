use super::error::{ConfigError, required_var};

/// Shared secret for verifying caller tokens (HS256).
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HMAC secret the login service signs tokens with (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt_secret: required_var("JWT_SECRET")?,
        })
    }
}
