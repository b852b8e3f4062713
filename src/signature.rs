//! HMAC-SHA256 verification for Vapi webhook callbacks.
//!
//! Vapi signs the raw request body and sends the lowercase-hex digest in the
//! `x-vapi-signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 of `payload` keyed by `secret`, as lowercase hex.
pub fn hmac_hex(payload: &[u8], secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a signature header against the expected digest of the raw body.
/// An empty signature never verifies.
pub fn verify(payload: &[u8], signature: &str, secret: &str) -> bool {
    if signature.is_empty() {
        return false;
    }
    timing_safe_eq(signature, &hmac_hex(payload, secret))
}

/// Constant-time comparison; the mismatch position must not leak through
/// timing.
fn timing_safe_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a.bytes().zip(b.bytes()) {
        result |= a_byte ^ b_byte;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_signature_verifies() {
        let payload = br#"{"type":"call-started","data":{}}"#;
        let secret = "test_secret";
        let signature = hmac_hex(payload, secret);
        assert!(verify(payload, &signature, secret));
    }

    #[test]
    fn mismatching_signature_fails() {
        let payload = b"test payload";
        let signature = hmac_hex(b"different payload", "test_secret");
        assert!(!verify(payload, &signature, "test_secret"));
    }

    #[test]
    fn wrong_secret_fails() {
        let payload = b"test payload";
        let signature = hmac_hex(payload, "secret_a");
        assert!(!verify(payload, &signature, "secret_b"));
    }

    #[test]
    fn empty_signature_fails() {
        assert!(!verify(b"test payload", "", "test_secret"));
    }

    #[test]
    fn hmac_hex_is_deterministic_64_char_hex() {
        let a = hmac_hex(b"payload", "secret");
        let b = hmac_hex(b"payload", "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn timing_safe_eq_same() {
        assert!(timing_safe_eq("hello", "hello"));
    }

    #[test]
    fn timing_safe_eq_different() {
        assert!(!timing_safe_eq("hello", "world"));
    }

    #[test]
    fn timing_safe_eq_different_length() {
        assert!(!timing_safe_eq("hello", "hello_world"));
    }
}
