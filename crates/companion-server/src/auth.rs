//! Password hashing and access tokens.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("stored password hash is invalid: {0}")]
    InvalidHash(argon2::password_hash::Error),

    #[error("failed to sign token")]
    Sign(#[source] jsonwebtoken::errors::Error),

    #[error("token is invalid")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id")]
    InvalidSubject,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Claims {
    pub sub: String,
    // issued at
    pub iat: i64,
    pub exp: i64,
}

pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(AuthError::Hash)
}

/// Returns `Ok(false)` on a mismatch. Errors only if the stored hash can't be parsed.
pub(crate) fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(AuthError::InvalidHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub(crate) struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub(crate) fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues an HS256 token for `user_id` that expires after `ttl`.
    pub(crate) fn issue(&self, user_id: i32, ttl: chrono::Duration) -> Result<String, AuthError> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        self.sign(&claims)
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding).map_err(AuthError::Sign)
    }

    /// Validates signature and expiry and returns the user id of the subject.
    pub(crate) fn validate(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(AuthError::InvalidToken)?;
        data.claims.sub.parse().map_err(|_| AuthError::InvalidSubject)
    }
}
