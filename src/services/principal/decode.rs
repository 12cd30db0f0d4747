use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

use super::types::ClientPrincipal;

#[derive(Debug, Error)]
pub enum PrincipalError {
    #[error("principal header is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("principal header is not a valid principal document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the host-provided principal header value.
///
/// Surrounding whitespace is ignored. No signature or claim validation happens here.
pub fn decode_principal(header_value: &str) -> Result<ClientPrincipal, PrincipalError> {
    let raw = STANDARD.decode(header_value.trim())?;
    let principal = serde_json::from_slice(&raw)?;
    Ok(principal)
}

#[cfg(test)]
pub(crate) fn encode_principal(principal: &ClientPrincipal) -> String {
    STANDARD.encode(serde_json::to_vec(principal).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::principal::Claim;

    #[test]
    fn decodes_easy_auth_document() {
        let json = r#"{
            "auth_typ": "aad",
            "claims": [
                {"typ": "aud", "val": "api://greeting"},
                {"typ": "http://schemas.microsoft.com/identity/claims/scope", "val": "Greeting.Read"}
            ],
            "name_typ": "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name",
            "role_typ": "http://schemas.microsoft.com/ws/2008/06/identity/claims/role"
        }"#;
        let header = STANDARD.encode(json);

        let principal = decode_principal(&header).unwrap();
        assert_eq!(principal.auth_typ.as_deref(), Some("aad"));
        assert_eq!(principal.claims.len(), 2);
        assert_eq!(principal.claims[1].val, "Greeting.Read");
    }

    #[test]
    fn missing_claims_field_means_no_claims() {
        let header = STANDARD.encode(r#"{"auth_typ": "aad"}"#);
        let principal = decode_principal(&header).unwrap();
        assert!(principal.claims.is_empty());
    }

    #[test]
    fn claim_without_typ_is_accepted() {
        let header = STANDARD.encode(r#"{"claims": [{"val": "Greeting.Read"}]}"#);
        let principal = decode_principal(&header).unwrap();
        assert_eq!(principal.claims, vec![Claim::new("", "Greeting.Read")]);
    }

    #[test]
    fn encoded_principal_decodes_back() {
        let principal = ClientPrincipal {
            claims: vec![Claim::new("scp", "Greeting.Read")],
            ..Default::default()
        };
        let decoded = decode_principal(&format!(" {} ", encode_principal(&principal))).unwrap();
        assert_eq!(decoded.claims, principal.claims);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_principal("not base64 !!"),
            Err(PrincipalError::Base64(_))
        ));
    }

    #[test]
    fn rejects_non_json_payload() {
        let header = STANDARD.encode("Greeting.Read");
        assert!(matches!(
            decode_principal(&header),
            Err(PrincipalError::Json(_))
        ));
    }
}
