//! Signed Bearer Tokens
//!
//! Stateless bearer tokens binding an account identity to an expiry horizon:
//!
//! ```text
//! <account uuid>.<expires_at_ms>.<base64url(HMAC-SHA256(secret, "<uuid>.<expires_at_ms>"))>
//! ```
//!
//! Validity is determined entirely by signature verification and the expiry
//! check. There is no server-side token store and no revocation list; the
//! signing secret is fixed at process start.

use std::time::Duration;

use axum::http::{HeaderMap, header};
use thiserror::Error;
use uuid::Uuid;

use crate::crypto::{from_base64_url, hmac_sha256, hmac_sha256_verify, to_base64_url};

/// Token verification errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token does not have the expected three-part shape
    #[error("Malformed token")]
    Malformed,

    /// Signature does not verify under the process secret
    #[error("Invalid token signature")]
    BadSignature,

    /// Token was valid once but its expiry horizon has passed
    #[error("Token expired")]
    Expired,
}

/// Identity carried by a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    /// Account the token was issued to
    pub account_id: Uuid,
    /// Expiry horizon (Unix timestamp ms)
    pub expires_at_ms: i64,
}

/// Issue a signed token for an account, expiring `ttl` from `now_ms`.
pub fn issue_token(secret: &[u8; 32], account_id: &Uuid, ttl: Duration, now_ms: i64) -> String {
    let expires_at_ms = now_ms + ttl.as_millis() as i64;
    let payload = format!("{}.{}", account_id, expires_at_ms);
    let signature = hmac_sha256(secret, payload.as_bytes());

    format!("{}.{}", payload, to_base64_url(&signature))
}

/// Verify a token and return its claims.
///
/// Signature is checked before expiry so a forged "fresh" expiry cannot
/// resurrect a token.
pub fn verify_token(secret: &[u8; 32], token: &str, now_ms: i64) -> Result<TokenClaims, TokenError> {
    let mut parts = token.splitn(3, '.');
    let (Some(id_str), Some(exp_str), Some(sig_b64)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let account_id: Uuid = id_str.parse().map_err(|_| TokenError::Malformed)?;
    let expires_at_ms: i64 = exp_str.parse().map_err(|_| TokenError::Malformed)?;

    let signature = from_base64_url(sig_b64).map_err(|_| TokenError::Malformed)?;

    let payload = format!("{}.{}", id_str, exp_str);
    if !hmac_sha256_verify(secret, payload.as_bytes(), &signature) {
        return Err(TokenError::BadSignature);
    }

    if now_ms > expires_at_ms {
        return Err(TokenError::Expired);
    }

    Ok(TokenClaims {
        account_id,
        expires_at_ms,
    })
}

/// Extract a bearer token from the `Authorization` header.
///
/// Expected transport format: `Authorization: Bearer <token>`.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: [u8; 32] = [42u8; 32];
    const NOW_MS: i64 = 1_700_000_000_000;
    const WEEK: Duration = Duration::from_secs(7 * 24 * 3600);

    #[test]
    fn test_issue_verify_roundtrip() {
        let account_id = Uuid::new_v4();
        let token = issue_token(&SECRET, &account_id, WEEK, NOW_MS);

        let claims = verify_token(&SECRET, &token, NOW_MS).unwrap();
        assert_eq!(claims.account_id, account_id);
        assert_eq!(claims.expires_at_ms, NOW_MS + WEEK.as_millis() as i64);
    }

    #[test]
    fn test_expired_token() {
        let account_id = Uuid::new_v4();
        let token = issue_token(&SECRET, &account_id, WEEK, NOW_MS);

        let after_expiry = NOW_MS + WEEK.as_millis() as i64 + 1;
        assert_eq!(
            verify_token(&SECRET, &token, after_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let account_id = Uuid::new_v4();
        let token = issue_token(&SECRET, &account_id, WEEK, NOW_MS);

        assert_eq!(
            verify_token(&[7u8; 32], &token, NOW_MS),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_tampered_expiry_rejected() {
        let account_id = Uuid::new_v4();
        let token = issue_token(&SECRET, &account_id, WEEK, NOW_MS);

        // Push the expiry forward without re-signing
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_exp = format!("{}", NOW_MS + 10 * WEEK.as_millis() as i64);
        parts[1] = &forged_exp;
        let forged = parts.join(".");

        assert_eq!(
            verify_token(&SECRET, &forged, NOW_MS),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(verify_token(&SECRET, "", NOW_MS), Err(TokenError::Malformed));
        assert_eq!(
            verify_token(&SECRET, "not-a-token", NOW_MS),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            verify_token(&SECRET, "a.b.c", NOW_MS),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer(&headers), None);
    }
}
