use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenProvider};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_JWT_ISSUER: &str = "forum-test";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig::new(
        TEST_JWT_SECRET.to_string(),
        TEST_JWT_ISSUER.to_string(),
    ))
}

/// Signs HS256 claims the way the account service does.
pub fn mint_token(
    secret: &str,
    issuer: &str,
    user_id: Uuid,
    token_type: &str,
    expiry_seconds: i64,
) -> String {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        iss: issuer.to_string(),
        exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
        iat: now.timestamp(),
        nbf: now.timestamp(),
        token_type: token_type.to_string(),
        is_verified: true,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("test token")
}

/// Token provider in the shape the `AuthenticatedUser` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    let token = mint_token(TEST_JWT_SECRET, TEST_JWT_ISSUER, user_id, "access", 1800);
    ("Authorization", format!("Bearer {}", token))
}
