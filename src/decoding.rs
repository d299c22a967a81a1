use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::crypto::verify;
use crate::errors::{new_error, ErrorKind, Result};
use crate::header::Header;
use crate::serialization::{b64_decode, from_jwt_part_claims};
use crate::Algorithm;

use base64::{engine::general_purpose::STANDARD, Engine};
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;

/// Converts an encoded header segment into the Header struct if possible.
///
/// The `alg` value is vetted before the rest of the header is deserialized,
/// so an unsupported algorithm surfaces as such rather than as a parse
/// failure - and before any key material is touched.
pub(crate) fn from_encoded(encoded_part: &str) -> Result<Header> {
    let decoded = b64_decode(encoded_part)?;
    let s = String::from_utf8(decoded)?;
    let raw: Value = serde_json::from_str(&s)?;

    match raw.get("alg") {
        Some(Value::String(alg)) => {
            Algorithm::from_str(alg)?;
        }
        // an object without a usable alg has nothing to dispatch on; anything
        // that is not an object is a shape error for Header deserialization
        Some(_) | None if raw.is_object() => {
            return Err(new_error(ErrorKind::InvalidAlgorithm))
        }
        _ => {}
    }

    Ok(serde_json::from_value(raw)?)
}

/// The return type of a successful call to [decode].
#[derive(Debug)]
pub struct TokenData<T> {
    /// The decoded header
    pub header: Header,
    /// The decoded claims
    /// Note: see <https://www.iana.org/assignments/jwt/jwt.xhtml#claims> for many of the properties that you might encounter.
    pub claims: T,
}

/// Takes a token string and ensures it splits into exactly three non-empty
/// segments.
/// Errors if it doesn't.
macro_rules! expect_three {
    ($token:expr) => {{
        let mut i = $token.split('.');
        match (i.next(), i.next(), i.next(), i.next()) {
            (Some(first), Some(second), Some(third), None)
                if !first.is_empty() && !second.is_empty() && !third.is_empty() =>
            {
                (first, second, third)
            }
            _ => return Err(new_error(ErrorKind::InvalidToken)),
        }
    }};
}

/// All the different kinds of keys we can use to decode a token.
/// This key can be re-used so make sure you only initialize it once if you can for better performance
#[derive(Debug, Clone, PartialEq)]
pub enum DecodingKey {
    /// The shared secret for HS256
    Hmac(Vec<u8>),
    /// A public key for RS256
    Rsa(RsaPublicKey),
}

impl DecodingKey {
    /// If you're using HMAC, use this.
    pub fn from_secret(secret: &[u8]) -> Self {
        DecodingKey::Hmac(secret.to_vec())
    }

    /// If you're using HMAC with a base64 encoded secret, use this.
    pub fn from_base64_secret(secret: &str) -> Result<Self> {
        Ok(DecodingKey::Hmac(STANDARD.decode(secret)?))
    }

    /// If you already parsed an RSA public key, use that.
    pub fn from_rsa(key: RsaPublicKey) -> Self {
        DecodingKey::Rsa(key)
    }

    /// Parse a PEM-encoded RSA public key, SPKI or PKCS#1.
    pub fn from_rsa_pem(pem: &str) -> Result<Self> {
        let key = RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|_| new_error(ErrorKind::InvalidKeyFormat))?;
        Ok(DecodingKey::Rsa(key))
    }

    /// Convenience function for keys distributed as base64url modulus and
    /// exponent components
    pub fn from_rsa_components(n: &str, e: &str) -> Result<Self> {
        let n = rsa::BigUint::from_bytes_be(&b64_decode(n)?);
        let e = rsa::BigUint::from_bytes_be(&b64_decode(e)?);
        Ok(DecodingKey::Rsa(
            RsaPublicKey::new(n, e).map_err(|_| new_error(ErrorKind::InvalidKeyFormat))?,
        ))
    }
}

/// Decode and verify a token.
///
/// Verification is binary: the call either returns the parsed header and
/// claims, or fails. There is no code path that hands back unverified claims,
/// and a failed signature check carries no detail about why.
///
/// Claim semantics (expiry, audience, ...) are the caller's business, after
/// this returns.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use webtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Claims {
///    sub: String,
///    company: String,
/// }
///
/// let claims = Claims { sub: "b@b.com".to_owned(), company: "ACME".to_owned() };
/// let token = encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(b"secret")).unwrap();
/// // Claims is a struct that implements Deserialize
/// let token_data = decode::<Claims>(&token, &DecodingKey::from_secret(b"secret")).unwrap();
/// assert_eq!(token_data.claims.company, "ACME");
/// ```
pub fn decode<T: DeserializeOwned>(token: &str, key: &DecodingKey) -> Result<TokenData<T>> {
    let (header_segment, claims_segment, signature) = expect_three!(token);
    let header = from_encoded(header_segment)?;
    let claims: T = from_jwt_part_claims(claims_segment)?;

    let message = [header_segment, claims_segment].join(".");
    if !verify(signature, &message, key, header.alg)? {
        return Err(new_error(ErrorKind::InvalidSignature));
    }

    Ok(TokenData { header, claims })
}

/// Decode the header of a token without verifying anything.
///
/// Useful for picking a [DecodingKey] before calling [decode]; everything
/// else about the token remains untrusted until then.
///
/// ```rust
/// use webtoken::decode_header;
///
/// let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJ1c2VyMSJ9.sig";
/// let header = decode_header(token).unwrap();
/// ```
pub fn decode_header(token: &str) -> Result<Header> {
    let (header_segment, _, _) = expect_three!(token);
    from_encoded(header_segment)
}
