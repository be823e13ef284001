//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs. Clients treat them as opaque strings.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokenClaims {
    /// Subject (user id).
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token id.
    pub jti: String,
}

/// Issue a signed session token for `user_id`.
pub fn issue_session_token(user_id: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = SessionTokenClaims {
        sub: user_id.to_string(),
        iss: config.jwt_issuer.clone(),
        iat: now,
        exp: now + config.token_lifetime_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Verify signature, issuer, and expiry of a session token.
pub fn decode_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

    jsonwebtoken::decode::<SessionTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            jwt_issuer: "nexus-test".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn token_roundtrip() {
        let config = test_config();
        let token = issue_session_token("u_1", &config).unwrap();
        let claims = decode_session_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "u_1");
        assert_eq!(claims.iss, "nexus-test");
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn jti_is_unique() {
        let config = test_config();
        let c1 = decode_session_token(&issue_session_token("u_1", &config).unwrap(), &config)
            .unwrap();
        let c2 = decode_session_token(&issue_session_token("u_1", &config).unwrap(), &config)
            .unwrap();
        assert_ne!(c1.jti, c2.jti);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = issue_session_token("u_1", &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "another-secret".into(),
            ..test_config()
        };
        let err = decode_session_token(&token, &other).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(_)));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let config = test_config();
        let token = issue_session_token("u_1", &config).unwrap();

        let other = AuthConfig {
            jwt_issuer: "someone-else".into(),
            ..test_config()
        };
        assert!(decode_session_token(&token, &other).is_err());
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = SessionTokenClaims {
            sub: "u_1".into(),
            iss: config.jwt_issuer.clone(),
            iat: now - 7_200,
            exp: now - 3_600,
            jti: Uuid::new_v4().to_string(),
        };
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key).unwrap();

        let err = decode_session_token(&token, &config).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = decode_session_token("not-a-token", &test_config()).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid(_)));
    }
}
