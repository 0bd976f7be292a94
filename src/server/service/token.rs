//! JWT bearer token issuing and verification.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claims embedded in every issued token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: i32,
    pub username: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and verifies HS256 bearer tokens.
///
/// Clones share the underlying keys, so the service can live in `AppState`
/// and be cloned per request cheaply.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            expiry_hours,
        }
    }

    /// Issues a token for the given account, expiring after the configured
    /// number of hours.
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.keys.encoding)?)
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())?;

        Ok(data.claims)
    }
}
