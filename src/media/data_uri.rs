// SPDX-License-Identifier: MPL-2.0
//! Encoding and decoding of `data:` URIs used by the enhancement wire contract.
//!
//! The service expects the source image inline as a base64 data URI and
//! answers with the enhanced image in the same form.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encodes raw image bytes as a base64 data URI with the given MIME type.
#[must_use]
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Decodes a base64 data URI into its MIME type and raw bytes.
///
/// # Errors
///
/// Returns [`Error::Image`] when the string is not a base64 data URI or the
/// payload is not valid base64.
pub fn decode(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| Error::Image("not a data URI".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Image("data URI has no payload".to_string()))?;

    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::Image("data URI is not base64-encoded".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::Image(format!("invalid base64 payload: {e}")))?;

    Ok((mime.to_string(), bytes))
}

/// Guesses the MIME type from the leading bytes of an encoded image.
///
/// Falls back to `image/png` for unrecognized content, which matches what the
/// backend produces.
#[must_use]
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'B', b'M', ..] => "image/bmp",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => "image/tiff",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_expected_prefix() {
        let uri = encode("image/png", &[1, 2, 3]);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn decode_round_trips_bytes_and_mime() {
        let bytes = vec![0_u8, 127, 255, 42];
        let uri = encode("image/jpeg", &bytes);

        let (mime, decoded) = decode(&uri).expect("decode should succeed");
        assert_eq!(mime, "image/jpeg");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn decode_rejects_non_data_uri() {
        match decode("https://example.org/image.png") {
            Err(Error::Image(msg)) => assert!(msg.contains("not a data URI")),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_missing_payload() {
        match decode("data:image/png;base64") {
            Err(Error::Image(msg)) => assert!(msg.contains("no payload")),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_non_base64_encoding() {
        match decode("data:image/png,rawdata") {
            Err(Error::Image(msg)) => assert!(msg.contains("not base64")),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_invalid_base64_payload() {
        match decode("data:image/png;base64,!!!not-base64!!!") {
            Err(Error::Image(msg)) => assert!(msg.contains("invalid base64")),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn sniff_recognizes_png_and_jpeg() {
        assert_eq!(sniff_mime(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
    }

    #[test]
    fn sniff_falls_back_to_png() {
        assert_eq!(sniff_mime(&[0x00, 0x01, 0x02]), "image/png");
    }
}
