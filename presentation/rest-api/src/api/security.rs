use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;
use thiserror::Error;

use business::domain::shared::value_objects::UserId;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("auth.token_validation_failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("auth.invalid_subject")]
    InvalidSubject,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CallerClaims {
    sub: String,
    exp: u64,
}

/// Verifies HS256 tokens issued by the login service and resolves the caller.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let token_data = decode::<CallerClaims>(token, &self.key, &self.validation)?;

        token_data
            .claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidSubject)
    }
}

/// Bearer token resolving to the calling user's id
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "caller_bearer_checker")]
pub struct CallerBearer(pub UserId);

async fn caller_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<UserId> {
    let Some(verifier) = req.data::<Arc<JwtVerifier>>() else {
        tracing::error!("JWT verifier is not registered on the route");
        return None;
    };

    match verifier.verify(&bearer.token) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Caller authentication failed: {e}");
            None
        }
    }
}
