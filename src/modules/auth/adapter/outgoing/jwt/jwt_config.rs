#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    /// HS256 requires at least 32 bytes of key material.
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn new(secret_key: String, issuer: String) -> Self {
        Self { secret_key, issuer }
    }
}
