//! Unverified extraction of claims from an access credential.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use partnerhub_core::AppError;

use super::claims::AccessClaims;

/// Decodes the payload segment of an access credential.
///
/// The signature is deliberately NOT verified: the server is the authority
/// and re-checks the credential on every protected call. The claims are
/// read only to populate local session state; this is not a security
/// control and must not become one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimsDecoder;

impl ClaimsDecoder {
    /// Decode the claims from a compact `header.payload.signature` credential.
    pub fn decode(credential: &str) -> Result<AccessClaims, AppError> {
        let mut segments = credential.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AppError::authentication(
                "Malformed access credential: expected three dot-separated segments",
            ));
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| {
            AppError::authentication(format!("Access credential payload is not base64url: {e}"))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::authentication(format!("Access credential claims are not valid JSON: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountStatus, PartnerRole};
    use partnerhub_core::error::ErrorKind;

    fn encode_segment(json: &serde_json::Value) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(json).expect("serialize"))
    }

    fn make_credential(payload: &serde_json::Value) -> String {
        let header = encode_segment(&serde_json::json!({"alg": "HS256", "typ": "JWT"}));
        format!("{header}.{}.sig", encode_segment(payload))
    }

    #[test]
    fn test_decode_reads_claims_without_verification() {
        let credential = make_credential(&serde_json::json!({
            "sub": "42",
            "type": "creator",
            "status": "active",
            "iat": 1_700_000_000,
            "exp": 4_102_444_800i64,
        }));

        let claims = ClaimsDecoder::decode(&credential).expect("decode");
        assert_eq!(claims.subject_id().unwrap(), 42);
        assert_eq!(claims.role, PartnerRole::Creator);
        assert_eq!(claims.status, AccountStatus::Active);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_decode_accepts_expired_credential() {
        // Expiry is the server's concern; the decoder only reads claims.
        let credential = make_credential(&serde_json::json!({
            "sub": "7",
            "type": "seller",
            "status": "suspended",
            "exp": 1000,
        }));

        let claims = ClaimsDecoder::decode(&credential).expect("decode");
        assert!(claims.is_expired());
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        let err = ClaimsDecoder::decode("only-one-segment").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);

        let err = ClaimsDecoder::decode("a.b.c.d").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = ClaimsDecoder::decode("head.!!not-base64!!.sig").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_decode_rejects_bad_json() {
        let garbage = URL_SAFE_NO_PAD.encode(b"not json at all");
        let err = ClaimsDecoder::decode(&format!("head.{garbage}.sig")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
