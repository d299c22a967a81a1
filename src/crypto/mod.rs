//! The signing and verification primitives behind [encode](crate::encode)
//! and [decode](crate::decode), dispatched over [Algorithm].
//!
//! Exposed for callers that want to sign something other than a full token;
//! the message here is the already-encoded `header.claims` string.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::algorithms::Algorithm;
use crate::decoding::DecodingKey;
use crate::encoding::EncodingKey;
use crate::errors::{new_error, ErrorKind, Result};
use crate::serialization::{b64_decode, b64_encode};

pub(crate) mod rsa;

type HmacSha256 = Hmac<Sha256>;

/// The actual HS256 signing + encoding.
/// Could be in its own file to match RSA but it's a few lines...
pub(crate) fn sign_hmac(key: &[u8], message: &str) -> Result<String> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|_| new_error(ErrorKind::InvalidKeyFormat))?;
    mac.update(message.as_bytes());
    Ok(b64_encode(mac.finalize().into_bytes().as_slice()))
}

/// Validates that the key can be used with the given algorithm
pub fn validate_matching_key(key: &EncodingKey, algorithm: Algorithm) -> Result<()> {
    match key {
        EncodingKey::Hmac(_) => match algorithm {
            Algorithm::HS256 => Ok(()),
            _ => Err(ErrorKind::InvalidAlgorithm.into()),
        },
        EncodingKey::Rsa(_) => match algorithm {
            Algorithm::RS256 => Ok(()),
            _ => Err(ErrorKind::InvalidAlgorithm.into()),
        },
    }
}

/// Take the message of a token, sign it using the algorithm given and return
/// the base64url-encoded signature.
///
/// If you just want to encode a token, use [encode](crate::encode) instead.
pub fn sign(message: &str, key: &EncodingKey, algorithm: Algorithm) -> Result<String> {
    match key {
        EncodingKey::Hmac(secret) => match algorithm {
            Algorithm::HS256 => sign_hmac(secret, message),
            _ => Err(ErrorKind::InvalidAlgorithm.into()),
        },
        EncodingKey::Rsa(private_key) => match algorithm {
            Algorithm::RS256 => rsa::sign(private_key, message),
            _ => Err(ErrorKind::InvalidAlgorithm.into()),
        },
    }
}

/// Compares the signature given with a re-computed signature for HMAC, or
/// runs the public-key verification primitive for RSA.
///
/// If you just want to decode a token, use [decode](crate::decode) instead.
///
/// `signature` is the signature segment of a token (text after the second
/// `.`), `message` is `base64url(header) + "." + base64url(claims)`.
pub fn verify(
    signature: &str,
    message: &str,
    key: &DecodingKey,
    algorithm: Algorithm,
) -> Result<bool> {
    match key {
        DecodingKey::Hmac(secret) => match algorithm {
            Algorithm::HS256 => {
                // decode failure means a corrupted signature, which must be
                // indistinguishable from a mismatch
                let provided = b64_decode(signature)
                    .map_err(|_| new_error(ErrorKind::InvalidSignature))?;
                let mut mac = HmacSha256::new_from_slice(secret)
                    .map_err(|_| new_error(ErrorKind::InvalidKeyFormat))?;
                mac.update(message.as_bytes());
                // constant-time comparison
                Ok(mac.verify_slice(&provided).is_ok())
            }
            _ => Err(ErrorKind::InvalidAlgorithm.into()),
        },
        DecodingKey::Rsa(public_key) => match algorithm {
            Algorithm::RS256 => rsa::verify(signature, message, public_key),
            _ => Err(ErrorKind::InvalidAlgorithm.into()),
        },
    }
}
