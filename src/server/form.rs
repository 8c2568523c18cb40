//! Decoding of the `content=<urlencoded html>` request body

use super::errors::ApiError;

const CONTENT_PREFIX: &str = "content=";

/// Strip the `content=` prefix and query-unescape the rest.
///
/// `+` decodes to a space and `%XX` sequences to their bytes, which must form
/// valid UTF-8. A body without the prefix is decoded as-is.
///
/// # Errors
///
/// Returns `ApiError::Decode` when a `%` is not followed by two hex digits or
/// the decoded bytes are not UTF-8.
pub fn decode_form_content(body: &str) -> Result<String, ApiError> {
    let encoded = body.strip_prefix(CONTENT_PREFIX).unwrap_or(body);
    check_percent_escapes(encoded)?;
    let encoded = encoded.replace('+', " ");
    urlencoding::decode(&encoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Every `%` must start a complete `%XX` escape.
fn check_percent_escapes(encoded: &str) -> Result<(), ApiError> {
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                let end = (i + 3).min(bytes.len());
                let invalid = String::from_utf8_lossy(&bytes[i..end]);
                return Err(ApiError::Decode(format!("invalid URL escape \"{invalid}\"")));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix_and_decodes() {
        let body = "content=%3Ctable%3E%3Ctr%3E%3Ctd%3EAcme%2C+Inc.%3C%2Ftd%3E%3C%2Ftr%3E%3C%2Ftable%3E";
        assert_eq!(
            decode_form_content(body).unwrap(),
            "<table><tr><td>Acme, Inc.</td></tr></table>"
        );
    }

    #[test]
    fn test_body_without_prefix_is_decoded() {
        assert_eq!(decode_form_content("%3Cp%3Ehi%3C%2Fp%3E").unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_encoded_plus_stays_plus() {
        assert_eq!(decode_form_content("content=1%2B1+%3D+2").unwrap(), "1+1 = 2");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = decode_form_content("content=%FF%FE").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_non_hex_escape_is_rejected() {
        let err = decode_form_content("content=%zz").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().contains("%zz"));
    }

    #[test]
    fn test_trailing_percent_is_rejected() {
        assert!(matches!(
            decode_form_content("content=%3Ctd%3E100%").unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_truncated_escape_is_rejected() {
        assert!(matches!(
            decode_form_content("content=%4").unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_unencoded_paste_with_percent_is_rejected() {
        let err = decode_form_content("content=<table><tr><td>100%</td></tr></table>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_encoded_percent_is_accepted() {
        assert_eq!(decode_form_content("content=100%25").unwrap(), "100%");
    }

    #[test]
    fn test_utf8_sequences_are_decoded() {
        assert_eq!(decode_form_content("content=M%C3%BCnchen").unwrap(), "München");
    }
}
