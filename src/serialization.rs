use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use crate::errors::Result;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes as unpadded, URL-safe base64.
///
/// Takes anything byte-like; text goes through its UTF-8 representation
/// (`&str` coerces via `AsRef<[u8]>`). Never fails.
pub(crate) fn b64_encode<T: AsRef<[u8]>>(input: T) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded, URL-safe base64 back to bytes.
///
/// The unpadded form is the only accepted one; `=` padding is malformed
/// input here, as is anything outside the `-`/`_` alphabet.
pub(crate) fn b64_decode<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(input).map_err(|e| e.into())
}

/// Serialize to JSON and base64url-encode, producing one token segment.
pub(crate) fn b64_encode_part<T: Serialize>(input: &T) -> Result<String> {
    let json = serde_json::to_string(input)?;
    Ok(b64_encode(json.as_bytes()))
}

/// Decode a claims segment and parse it into the caller's type.
pub(crate) fn from_jwt_part_claims<B: AsRef<str>, T: DeserializeOwned>(
    encoded_claims: B,
) -> Result<T> {
    let s = String::from_utf8(b64_decode(encoded_claims.as_ref())?)?;
    Ok(serde_json::from_str(&s)?)
}
