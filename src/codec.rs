//! URL-safe base64 text codec
//!
//! Reversible encoding between UTF-8 text and the RFC 4648
//! URL-and-filename-safe base64 alphabet. Output carries no padding so
//! encoded values can be embedded in URLs and tokens without escaping.

use crate::error::Result;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

/// Decoder that accepts input with or without trailing padding.
const URL_SAFE_ANY_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode text as unpadded URL-safe base64
pub fn encode(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

/// Decode URL-safe base64 back into text
///
/// Accepts both padded and unpadded input. Fails on characters outside
/// the URL-safe alphabet and on decoded bytes that are not valid UTF-8;
/// malformed input is never truncated or replaced.
pub fn decode(value: &str) -> Result<String> {
    let bytes = URL_SAFE_ANY_PAD.decode(value)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use test_case::test_case;

    #[test_case("" ; "empty string")]
    #[test_case("admin" ; "ascii")]
    #[test_case("a" ; "length needing two padding chars")]
    #[test_case("ab" ; "length needing one padding char")]
    #[test_case("päron?ü&=/" ; "latin supplement and url metacharacters")]
    #[test_case("日本語テキスト" ; "multi-byte cjk")]
    #[test_case("🦀 emoji" ; "astral plane")]
    fn test_round_trip(input: &str) {
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }

    #[test]
    fn test_encode_known_vector() {
        // "subjects?" forces '+' and '/' in the standard alphabet.
        assert_eq!(encode("subjects?"), "c3ViamVjdHM_");
        assert_eq!(encode("light work"), "bGlnaHQgd29yaw");
    }

    #[test]
    fn test_encoded_output_is_url_safe_and_unpadded() {
        let encoded = encode("any carnal pleasure.");
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_decode_accepts_padded_input() {
        assert_eq!(decode("bGlnaHQgd29yaw==").unwrap(), "light work");
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        // '/' belongs to the standard alphabet, not the URL-safe one.
        assert!(decode("c3ViamVjdHM/").is_err());
        assert!(decode("a+b").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode("not base64!").unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        // 0xFF is never valid UTF-8.
        let encoded = URL_SAFE_NO_PAD.encode([0xff_u8, 0xfe]);
        let err = decode(&encoded).unwrap_err();
        assert!(matches!(err, Error::Utf8(_)));
    }
}
