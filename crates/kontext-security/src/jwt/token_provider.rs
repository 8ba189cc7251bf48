//! Token provider for creating and validating bearer tokens.

use super::Claims;
use crate::UserPrincipal;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kontext_config::SecurityConfig;
use kontext_core::{KontextError, KontextResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Bearer token provider.
///
/// Issues HS256 tokens for a principal and resolves incoming tokens back
/// into the caller's principal.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates a token for a principal.
    pub fn generate_token(&self, principal: &UserPrincipal) -> KontextResult<String> {
        let claims = Claims::new(
            principal,
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            self.config.jwt_expiration_secs,
        );

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| KontextError::Internal(format!("Failed to generate token: {}", e)))?;

        debug!("Generated token for caller {}", principal.id);
        Ok(token)
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> KontextResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => KontextError::TokenExpired,
                    _ => KontextError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Resolves a token to the authenticated caller's principal.
    pub fn resolve_principal(&self, token: &str) -> KontextResult<UserPrincipal> {
        let claims = self.validate_token(token)?;

        claims.principal().ok_or_else(|| {
            KontextError::InvalidToken("Token subject is not a record id".to_string())
        })
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider").finish_non_exhaustive()
    }
}
