//! Token issuance for calls into the records backend.
//!
//! Two disjoint trust mechanisms are minted here and verified by the backend:
//!
//! - a short-lived access token whose claims carry a keyed hash of a separate
//!   anti-forgery value, so possessing either the token or the value alone is
//!   insufficient, and
//! - a service token identifying a fixed calling service, with no expiry.
//!   It is rotated out of band instead of expiring automatically.
//!
//! This crate only issues tokens. Verification lives in the backend, but the
//! binding rule is part of the contract: a verifier recomputes
//! HMAC-SHA256(secret, presented anti-forgery value) and rejects the pair
//! unless it equals the token's `csrf_hmac` claim.

mod error;

pub use error::TokenError;

use chrono::Utc;
use hmac::{Hmac, Mac};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of an issued access token, in seconds.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Claims carried by a short-lived access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject the token was issued to.
    pub id: String,

    /// Hex HMAC-SHA256 of the anti-forgery value, keyed by the signing
    /// secret.
    pub csrf_hmac: String,

    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// Claims carried by a service-to-service token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceClaims {
    /// Identity of the calling service.
    pub service: String,
}

/// Issues the signed tokens used to authorize record fetches.
pub struct TokenIssuer {
    key: EncodingKey,
    secret: Vec<u8>,
}

impl TokenIssuer {
    /// Creates an issuer signing with `secret`.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            secret: secret.as_bytes().to_vec(),
        })
    }

    /// Issues an access token bound to a fresh anti-forgery value.
    ///
    /// Returns the signed token and the plaintext anti-forgery value. The
    /// caller must present both on every subsequent request so the backend
    /// can recompute the binding and compare it to the `csrf_hmac` claim.
    pub fn issue_access_token(&self, subject: &str) -> Result<(String, String), TokenError> {
        let anti_forgery = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            id: subject.to_string(),
            csrf_hmac: csrf_binding(&self.secret, &anti_forgery),
            iat: now,
            exp: now + ACCESS_TOKEN_TTL_SECS,
        };

        let token = encode(&Header::default(), &claims, &self.key)?;
        log::debug!("issued access token for '{}'", subject);
        Ok((token, anti_forgery))
    }

    /// Issues a service-identity token.
    pub fn issue_service_token(&self, subject: &str) -> Result<String, TokenError> {
        let claims = ServiceClaims {
            service: subject.to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.key)?;
        log::debug!("issued service token for '{}'", subject);
        Ok(token)
    }
}

/// Hex HMAC-SHA256 of `value` keyed by `secret` — the binding that ties an
/// access token to its anti-forgery value.
pub fn csrf_binding(secret: &[u8], value: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(value.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
