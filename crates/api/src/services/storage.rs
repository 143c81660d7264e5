//! Signed URLs for private storage objects.
//!
//! Objects are served from `{base_url}/storage/object/{path}` by the edge
//! layer; this service issues time-limited URLs carrying an HMAC-SHA256
//! token over the path and expiry, and verifies presented tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Default lifetime for a signed URL, in seconds.
pub const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Maximum lifetime for a signed URL: 7 days.
pub const MAX_EXPIRES_IN: u64 = 7 * 24 * 3600;

/// A signed, time-limited URL for one storage object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrl {
    pub path: String,
    pub signed_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Errors from signed URL verification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignedUrlError {
    #[error("signed url has expired")]
    Expired,
    #[error("invalid token")]
    InvalidToken,
}

/// Issues and verifies HMAC-signed storage URLs.
#[derive(Clone)]
pub struct UrlSigner {
    secret: SecretString,
    base_url: String,
}

impl UrlSigner {
    /// Create a signer from the storage secret and public base URL.
    #[must_use]
    pub fn new(secret: SecretString, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { secret, base_url }
    }

    /// Issue a signed URL for an object path, valid for `expires_in`
    /// seconds from now (clamped to [`MAX_EXPIRES_IN`]).
    #[must_use]
    pub fn issue(&self, path: &str, expires_in: u64) -> SignedUrl {
        let expires_in = expires_in.min(MAX_EXPIRES_IN);
        #[allow(clippy::cast_possible_wrap)] // bounded by MAX_EXPIRES_IN
        let expires = Utc::now().timestamp() + expires_in as i64;
        let token = self.sign(path, expires);

        SignedUrl {
            path: path.to_string(),
            signed_url: format!(
                "{}/storage/object/{path}?expires={expires}&token={token}",
                self.base_url
            ),
            expires_at: DateTime::from_timestamp(expires, 0).unwrap_or_else(Utc::now),
        }
    }

    /// Compute the URL-safe base64 token for a path and expiry timestamp.
    #[must_use]
    pub fn sign(&self, path: &str, expires: i64) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(path.as_bytes());
        mac.update(b"\n");
        mac.update(expires.to_string().as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    /// Verify a presented token for a path and expiry timestamp.
    ///
    /// The HMAC comparison is constant-time. Expiry is checked first so an
    /// expired-but-valid token reports [`SignedUrlError::Expired`].
    ///
    /// # Errors
    ///
    /// Returns `Expired` if `expires` is in the past, `InvalidToken` if the
    /// token does not decode or does not match.
    pub fn verify(&self, path: &str, expires: i64, token: &str) -> Result<(), SignedUrlError> {
        if expires < Utc::now().timestamp() {
            return Err(SignedUrlError::Expired);
        }

        let presented = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| SignedUrlError::InvalidToken)?;

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(path.as_bytes());
        mac.update(b"\n");
        mac.update(expires.to_string().as_bytes());
        mac.verify_slice(&presented)
            .map_err(|_| SignedUrlError::InvalidToken)
    }
}

/// Validate a caller-supplied object path.
///
/// Paths are relative keys like `products/123/hero.jpg`. Rejects empty
/// paths, absolute paths, and `..` traversal segments.
pub fn validate_object_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path cannot be empty".to_string());
    }
    if path.starts_with('/') {
        return Err(format!("path must be relative: {path}"));
    }
    if path.split('/').any(|segment| segment == "..") {
        return Err(format!("path must not contain '..': {path}"));
    }
    Ok(())
}
