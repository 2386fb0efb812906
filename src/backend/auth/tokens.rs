/**
 * Access Tokens
 *
 * This module issues and verifies the signed, time-limited bearer tokens
 * handed out by signup and login. Tokens are HS256 JWTs carrying the user
 * id, the issue time and an expiry ten days later. There is no revocation:
 * a token stays valid until it expires.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime in days
pub const TOKEN_TTL_DAYS: i64 = 10;

/// Token type label returned to clients
pub const TOKEN_TYPE: &str = "Bearer";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub user_id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token payload returned by signup and login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Issues and verifies access tokens with a server-held secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::days(TOKEN_TTL_DAYS),
        }
    }

    /// Create a token for a user, issued now
    pub fn issue(&self, user_id: i64) -> Result<TokenResponse, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token for a user with an explicit issue time
    pub fn issue_at(
        &self,
        user_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenResponse, jsonwebtoken::errors::Error> {
        let claims = Claims {
            user_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// Decode a token, checking signature, algorithm and expiry
    pub fn decode_claims(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }

    /// Resolve a token to the user id it was issued for
    ///
    /// Any failure (bad signature, malformed payload, expiry) yields `None`.
    pub fn verify(&self, token: &str) -> Option<i64> {
        match self.decode_claims(token) {
            Ok(claims) => Some(claims.user_id),
            Err(e) => {
                tracing::debug!("Token rejected: {:?}", e.kind());
                None
            }
        }
    }
}
