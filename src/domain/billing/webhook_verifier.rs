//! Billing webhook signature verification.
//!
//! The provider signs the raw request body with HMAC-SHA256 under the shared
//! signing secret and sends the lowercase hex digest in the `x-signature`
//! header. The header text is compared as-is against the computed digest;
//! verification runs over exactly the bytes received, before any parsing.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::webhook_errors::WebhookError;
use super::webhook_event::WebhookEvent;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for billing webhook signatures.
pub struct WebhookSignatureVerifier {
    /// The webhook signing secret shared with the provider.
    secret: Secret<String>,
}

impl WebhookSignatureVerifier {
    /// Creates a new verifier with the given signing secret.
    ///
    /// An empty secret produces a verifier that rejects every signature.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
        }
    }

    /// Returns true if a non-empty secret is configured.
    pub fn has_secret(&self) -> bool {
        !self.secret.expose_secret().is_empty()
    }

    /// Verifies a hex-encoded signature against the raw payload.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidSignature` when the secret is empty or the
    /// signature text differs from the lowercase hex digest in any way
    /// (length, case, or content).
    pub fn verify(&self, payload: &[u8], signature: &str) -> Result<(), WebhookError> {
        if !self.has_secret() {
            tracing::debug!("rejecting webhook: no signing secret configured");
            return Err(WebhookError::InvalidSignature);
        }

        let expected = self.compute_signature(payload);

        if !constant_time_compare(expected.as_bytes(), signature.as_bytes()) {
            tracing::debug!("rejecting webhook: signature mismatch");
            return Err(WebhookError::InvalidSignature);
        }

        Ok(())
    }

    /// Verifies the signature, then parses the event.
    ///
    /// # Verification Steps
    ///
    /// 1. Compute expected signature using HMAC-SHA256 over the raw bytes
    /// 2. Compare the hex texts using constant-time comparison
    /// 3. Parse the JSON payload into a `WebhookEvent`
    ///
    /// # Errors
    ///
    /// - `InvalidSignature` - Signature verification failed
    /// - `Parse` - Payload is not a valid webhook event
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        self.verify(payload, signature)?;

        let event = WebhookEvent::from_slice(payload)?;
        Ok(event)
    }

    fn compute_signature(&self, payload: &[u8]) -> String {
        sign_payload(self.secret.expose_secret(), payload)
    }
}

impl std::fmt::Debug for WebhookSignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSignatureVerifier")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Computes the hex-encoded HMAC-SHA256 signature the provider would send.
///
/// Useful for signing fixtures and replaying captured deliveries.
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two byte slices.
///
/// Only the length check short-circuits; the digest length is public.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "abc123";

    const ORDER_CREATED: &str = r#"{"meta":{"event_name":"order_created","custom_data":{"userId":"u1"}},"data":{"id":"o1","attributes":{"identifier":"ORD-1"}}}"#;

    // ══════════════════════════════════════════════════════════════
    // Signature Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_valid_signature() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes());

        let result = verifier.verify(ORDER_CREATED.as_bytes(), &signature);

        assert!(result.is_ok());
    }

    #[test]
    fn verify_uppercase_digest_fails() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes()).to_uppercase();

        let result = verifier.verify(ORDER_CREATED.as_bytes(), &signature);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_mixed_case_digest_fails() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature: String = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes())
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        assert_ne!(signature, sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes()));

        let result = verifier.verify(ORDER_CREATED.as_bytes(), &signature);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let verifier = WebhookSignatureVerifier::new("wrong_secret");
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes());

        let result = verifier.verify(ORDER_CREATED.as_bytes(), &signature);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_tampered_payload_fails() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes());
        let tampered = ORDER_CREATED.replace("u1", "u2");

        let result = verifier.verify(tampered.as_bytes(), &signature);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_reserialized_payload_fails() {
        // Same JSON value, different bytes.
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes());
        let value: serde_json::Value = serde_json::from_str(ORDER_CREATED).unwrap();
        let pretty = serde_json::to_string_pretty(&value).unwrap();

        let result = verifier.verify(pretty.as_bytes(), &signature);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_non_hex_signature_fails() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);

        let result = verifier.verify(ORDER_CREATED.as_bytes(), "not-a-valid-hex-signature");

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_truncated_signature_fails() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes());

        let result = verifier.verify(ORDER_CREATED.as_bytes(), &signature[..32]);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn verify_empty_signature_fails() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);

        let result = verifier.verify(ORDER_CREATED.as_bytes(), "");

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn empty_secret_rejects_even_matching_signature() {
        let verifier = WebhookSignatureVerifier::new("");
        let signature = sign_payload("", ORDER_CREATED.as_bytes());

        assert!(!verifier.has_secret());
        let result = verifier.verify(ORDER_CREATED.as_bytes(), &signature);

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let verifier = WebhookSignatureVerifier::new("super-secret-value");
        let debug = format!("{:?}", verifier);
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("[REDACTED]"));
    }

    // ══════════════════════════════════════════════════════════════
    // Parsing Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_and_parse_returns_event() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let signature = sign_payload(TEST_SECRET, ORDER_CREATED.as_bytes());

        let event = verifier
            .verify_and_parse(ORDER_CREATED.as_bytes(), &signature)
            .unwrap();

        assert_eq!(event.order_id(), "o1");
        assert_eq!(event.order_identifier(), "ORD-1");
    }

    #[test]
    fn verify_and_parse_invalid_json_fails_after_signature() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
        let payload = b"not valid json";
        let signature = sign_payload(TEST_SECRET, payload);

        let result = verifier.verify_and_parse(payload, &signature);

        assert!(matches!(result, Err(WebhookError::Parse(_))));
    }

    #[test]
    fn verify_and_parse_checks_signature_before_json() {
        let verifier = WebhookSignatureVerifier::new(TEST_SECRET);

        let result = verifier.verify_and_parse(b"not valid json", "00");

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
    }

    // ══════════════════════════════════════════════════════════════
    // Known Vector
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn sign_payload_matches_rfc4231_case_two() {
        let signature = sign_payload("Jefe", b"what do ya want for nothing?");
        assert_eq!(
            signature,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Constant Time Comparison Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_compare_equal_values() {
        assert!(constant_time_compare(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]));
    }

    #[test]
    fn constant_time_compare_different_values() {
        assert!(!constant_time_compare(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 6]));
    }

    #[test]
    fn constant_time_compare_different_lengths() {
        assert!(!constant_time_compare(&[1, 2, 3], &[1, 2, 3, 4]));
    }

    // ══════════════════════════════════════════════════════════════
    // Properties
    // ══════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn correct_signature_always_accepted(
            secret in "[a-zA-Z0-9_]{1,64}",
            body in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let verifier = WebhookSignatureVerifier::new(secret.clone());
            let signature = sign_payload(&secret, &body);
            prop_assert!(verifier.verify(&body, &signature).is_ok());
        }

        #[test]
        fn case_altered_digest_rejected(
            body in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
            let expected = sign_payload(TEST_SECRET, &body);
            let upper = expected.to_ascii_uppercase();
            prop_assume!(upper != expected);
            prop_assert!(matches!(
                verifier.verify(&body, &upper),
                Err(WebhookError::InvalidSignature)
            ));
        }

        #[test]
        fn any_other_signature_rejected(
            body in proptest::collection::vec(any::<u8>(), 0..512),
            candidate in "[0-9a-fA-Fxz-]{0,130}",
        ) {
            let verifier = WebhookSignatureVerifier::new(TEST_SECRET);
            let expected = sign_payload(TEST_SECRET, &body);
            prop_assume!(candidate != expected);
            prop_assert!(matches!(
                verifier.verify(&body, &candidate),
                Err(WebhookError::InvalidSignature)
            ));
        }
    }
}
