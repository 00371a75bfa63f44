use std::fmt;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::config::JWTConfig;

/// Claims as an insertion-ordered JSON object, so they render in the order
/// they were signed.
pub type Claims = Map<String, Value>;

/// Failure while minting or reading back the demo token.
#[derive(Debug)]
pub enum TokenError {
    Encode(jsonwebtoken::errors::Error),
    Decode(jsonwebtoken::errors::Error),
    /// `iat + jwt.exp` does not fit in an `i64` timestamp.
    ExpiryOutOfRange(i64),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Encode(e) => write!(f, "Failed to encode JWT: {}", e),
            TokenError::Decode(e) => write!(f, "Failed to decode JWT: {}", e),
            TokenError::ExpiryOutOfRange(exp) => {
                write!(f, "Configured JWT lifetime {}s is out of range", exp)
            }
        }
    }
}

impl std::error::Error for TokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TokenError::Encode(e) | TokenError::Decode(e) => Some(e),
            TokenError::ExpiryOutOfRange(_) => None,
        }
    }
}

/// The fixed `{ user: "test" }` payload shown on every page.
pub struct DemoToken {
    user: String,
}

impl Default for DemoToken {
    fn default() -> Self {
        DemoToken {
            user: "test".to_string(),
        }
    }
}

impl DemoToken {
    #[cfg(test)]
    fn new(user: impl Into<String>) -> Self {
        DemoToken { user: user.into() }
    }

    /// Build the claim set: `user`, `iat`, and `exp` when a lifetime is configured.
    fn claims(&self, jwtconfig: &JWTConfig) -> Result<Claims, TokenError> {
        let now = Utc::now().timestamp();
        let mut claims = Map::new();
        claims.insert("user".to_string(), Value::from(self.user.clone()));
        claims.insert("iat".to_string(), Value::from(now));
        if let Some(exp) = jwtconfig.exp {
            let expiry = now
                .checked_add(exp)
                .ok_or(TokenError::ExpiryOutOfRange(exp))?;
            claims.insert("exp".to_string(), Value::from(expiry));
        }
        Ok(claims)
    }

    /// Sign the payload with HS256 and the configured secret.
    pub fn mint(&self, jwtconfig: &JWTConfig) -> Result<String, TokenError> {
        let encoding_key = EncodingKey::from_secret(jwtconfig.secret.as_ref());
        encode(&Header::default(), &self.claims(jwtconfig)?, &encoding_key)
            .map_err(TokenError::Encode)
    }

    /// Verify `token` against the configured secret and return its claims.
    ///
    /// `exp` is only required and checked when the configuration sets a
    /// lifetime; audience and issuer are never checked.
    pub fn decode(token: &str, jwtconfig: &JWTConfig) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        if jwtconfig.exp.is_some() {
            validation.required_spec_claims.insert("exp".to_string());
        } else {
            validation.validate_exp = false;
        }

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(jwtconfig.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(TokenError::Decode)
    }
}
