//! Conversion of raw request path segments into storage keys.
//!
//! Only the delete endpoint decodes its identifier, so a namespaced short id
//! like `yt/video` can be addressed as `yt%2Fvideo`. Create takes the id from
//! the JSON body and redirect takes the path remainder literally.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::AppError;

/// Characters left as-is by [`encode_key`]: RFC 3986 unreserved.
const KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-decodes a path segment into a storage key.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a `%` is not followed by two hex
/// digits or the decoded bytes are not valid UTF-8.
pub fn decode_key(raw: &str) -> Result<String, AppError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(AppError::bad_request(format!(
                    "Malformed percent-encoding in short ID '{raw}'"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| AppError::bad_request(format!("Short ID '{raw}' is not valid UTF-8")))
}

/// Percent-encodes a storage key so it survives as a single path segment.
///
/// Inverse of [`decode_key`]; used by the management client when addressing
/// namespaced ids on the delete endpoint.
pub fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_ENCODE_SET).to_string()
}
