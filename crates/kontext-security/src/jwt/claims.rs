//! Token claims structure.

use crate::UserPrincipal;
use kontext_core::ContextId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Bearer token claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (record id of the caller).
    pub sub: String,

    /// Caller's account name.
    pub username: String,

    /// Caller's role set.
    #[serde(default)]
    pub roles: HashSet<String>,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,
}

impl Claims {
    /// Creates claims for a principal, expiring after `expiration_secs`.
    #[must_use]
    pub fn new(
        principal: &UserPrincipal,
        issuer: String,
        audience: String,
        expiration_secs: u64,
    ) -> Self {
        let now = unix_timestamp();
        Self {
            sub: principal.id.to_string(),
            username: principal.username.clone(),
            roles: principal.roles.clone(),
            iat: now,
            exp: now + expiration_secs as i64,
            iss: issuer,
            aud: audience,
        }
    }

    /// Returns the caller id carried in the subject, if it parses.
    #[must_use]
    pub fn context_id(&self) -> Option<ContextId> {
        ContextId::parse(&self.sub).ok()
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        unix_timestamp() > self.exp
    }

    /// Builds the caller's principal from these claims, if the subject
    /// carries a record id.
    #[must_use]
    pub fn principal(&self) -> Option<UserPrincipal> {
        self.context_id().map(|id| UserPrincipal {
            id,
            username: self.username.clone(),
            roles: self.roles.clone(),
        })
    }
}

pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_from_principal() {
        let principal = UserPrincipal::new(ContextId::new(1), "usertest".to_string());
        let claims = Claims::new(
            &principal,
            "kontext".to_string(),
            "kontext-api".to_string(),
            3600,
        );

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.username, "usertest");
        assert_eq!(claims.context_id(), Some(ContextId::new(1)));
        assert!(!claims.is_expired());

        let resolved = claims.principal().unwrap();
        assert_eq!(resolved, principal);
    }

    #[test]
    fn test_non_integer_subject_has_no_context_id() {
        let principal = UserPrincipal::new(ContextId::new(1), "usertest".to_string());
        let mut claims = Claims::new(
            &principal,
            "kontext".to_string(),
            "kontext-api".to_string(),
            3600,
        );
        claims.sub = "not-an-id".to_string();

        assert!(claims.context_id().is_none());
        assert!(claims.principal().is_none());
    }
}
