use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, Error};

/// Lifetime of an issued bearer token
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Claims carried by every bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// ID of the authenticated user
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and validates HS256 bearer tokens with the configured secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a token for the user valid for [`TOKEN_LIFETIME_SECONDS`] from now
    pub fn issue(&self, user_id: i32) -> Result<String, Error> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token for the user as if it were issued at `issued_at`
    pub fn issue_at(&self, user_id: i32, issued_at: DateTime<Utc>) -> Result<String, Error> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(TOKEN_LIFETIME_SECONDS)).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(token)
    }

    /// Validates the token's signature & expiry, returning the user ID it was issued for
    ///
    /// # Returns
    /// - `Ok(user_id)` - Token is valid
    /// - `Err(AuthError::TokenExpired)` - Token was valid but its expiry has passed
    /// - `Err(AuthError::TokenInvalid)` - Bad signature, malformed token or subject
    pub fn authenticate(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!("Rejected bearer token: {}", err);

                    AuthError::TokenInvalid
                }
            },
        )?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::TokenInvalid)
    }
}
