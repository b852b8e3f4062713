use crate::types::CallRequest;

use sha2::{Digest, Sha256};

/// Derives the idempotency key for a request that did not supply one: the
/// lowercase-hex SHA-256 digest of the canonical JSON serialization of the
/// body.
///
/// Canonical here means compact separators with object keys sorted
/// lexicographically at every level and absent optional fields omitted.
/// `serde_json`'s default map representation is ordered, so re-serializing
/// the typed request yields those bytes directly. Two bodies that parse to
/// the same request therefore hash to the same key no matter how the caller
/// ordered their JSON keys.
pub fn derive_key(request: &CallRequest) -> String {
    let canonical = serde_json::to_value(request)
        .expect("CallRequest serialization cannot fail")
        .to_string();
    let digest = Sha256::digest(canonical.as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> CallRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn identical_bodies_derive_identical_keys() {
        let body = r#"{"customerNumber":"+14155551234","metadata":{"userId":"abc123"}}"#;
        assert_eq!(derive_key(&request(body)), derive_key(&request(body)));
    }

    #[test]
    fn key_order_does_not_affect_the_digest() {
        let a = request(r#"{"customerNumber":"+14155551234","assistantId":"asst_1"}"#);
        let b = request(r#"{"assistantId":"asst_1","customerNumber":"+14155551234"}"#);
        assert_eq!(derive_key(&a), derive_key(&b));
    }

    #[test]
    fn nested_metadata_order_does_not_affect_the_digest() {
        let a = request(
            r#"{"customerNumber":"+1","metadata":{"reason":"evening-checkin","userId":"abc"}}"#,
        );
        let b = request(
            r#"{"customerNumber":"+1","metadata":{"userId":"abc","reason":"evening-checkin"}}"#,
        );
        assert_eq!(derive_key(&a), derive_key(&b));
    }

    #[test]
    fn different_bodies_derive_different_keys() {
        let a = request(r#"{"customerNumber":"+14155551234"}"#);
        let b = request(r#"{"customerNumber":"+14155559999"}"#);
        assert_ne!(derive_key(&a), derive_key(&b));
    }

    #[test]
    fn key_is_lowercase_sha256_hex() {
        let key = derive_key(&request(r#"{"customerNumber":"+14155551234"}"#));
        assert_eq!(key.len(), 64);
        assert!(key
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
