use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    /// Verify signature, lifetime and issuer, then decode the claims.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::MalformedToken
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::tests::support::auth_helper::mint_token;

    const TEST_SECRET: &str = "test_secret_that_is_long_enough_for_hs256";
    const ISSUER: &str = "forum";

    fn test_config() -> JwtConfig {
        JwtConfig::new(TEST_SECRET.to_string(), ISSUER.to_string())
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(test_config())
    }

    fn access_token(user_id: Uuid, expiry_seconds: i64) -> String {
        mint_token(TEST_SECRET, ISSUER, user_id, "access", expiry_seconds)
    }

    #[test]
    fn test_verify_access_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = access_token(user_id, 3600);

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "forum");
        assert_eq!(claims.token_type, "access");
        assert!(claims.is_verified);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }

    #[test]
    fn test_expired_token() {
        // beyond the 30s leeway
        let service = create_test_jwt_service();
        let token = access_token(Uuid::new_v4(), -35);

        let result = service.verify_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::TokenExpired));
    }

    #[test]
    fn test_invalid_signature() {
        let token = access_token(Uuid::new_v4(), 3600);

        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{}_DIFFERENT", TEST_SECRET),
            ..test_config()
        });

        let result = other.verify_token(&token);

        assert!(matches!(result.unwrap_err(), TokenError::InvalidSignature));
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let token = access_token(Uuid::new_v4(), 3600);

        let other = JwtTokenService::new(JwtConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });

        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_claim_timestamps_are_decoded() {
        let service = create_test_jwt_service();
        let token = access_token(Uuid::new_v4(), 3600);
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now);
        assert!(claims.iat <= now);
        assert!(claims.nbf <= now);
    }

    #[test]
    fn test_jwt_service_debug_hides_secret() {
        let debug_str = format!("{:?}", create_test_jwt_service());
        assert!(debug_str.contains("JwtTokenService"));
        assert!(!debug_str.contains(TEST_SECRET));
    }
}
