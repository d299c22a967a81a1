use serde::ser::Serialize;

use crate::crypto;
use crate::errors::{new_error, ErrorKind, Result};
use crate::header::Header;
use crate::serialization::b64_encode_part;

use base64::{engine::general_purpose::STANDARD, Engine};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;

/// A key to encode a token with: an HMAC secret or an RSA private key.
/// This key can be re-used - so make sure you only initialize it once if you can for better performance
#[derive(Debug, Clone, PartialEq)]
pub enum EncodingKey {
    /// A shared secret for HS256
    Hmac(Vec<u8>),
    /// A private key for RS256
    Rsa(Box<RsaPrivateKey>),
}

impl EncodingKey {
    /// If you're using a HMAC secret that is not base64, use that.
    pub fn from_secret(secret: &[u8]) -> Self {
        EncodingKey::Hmac(secret.to_vec())
    }

    /// If you have a base64 HMAC secret, use that.
    pub fn from_base64_secret(secret: &str) -> Result<Self> {
        Ok(EncodingKey::Hmac(STANDARD.decode(secret)?))
    }

    /// If you already parsed an RSA private key, use that.
    pub fn from_rsa(key: RsaPrivateKey) -> Self {
        EncodingKey::Rsa(Box::new(key))
    }

    /// Parse a PEM-encoded RSA private key, PKCS#8 or PKCS#1.
    pub fn from_rsa_pem(pem: &str) -> Result<Self> {
        let key = RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|_| new_error(ErrorKind::InvalidKeyFormat))?;
        Ok(EncodingKey::Rsa(Box::new(key)))
    }
}

/// Encode the header and claims given and sign the message using the
/// algorithm from the header and the key.
///
/// The key family has to match `header.alg`; that check happens before any
/// cryptographic work.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use webtoken::{encode, Algorithm, EncodingKey, Header};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Claims {
///    sub: String,
///    company: String
/// }
///
/// let my_claims = Claims {
///     sub: "b@b.com".to_owned(),
///     company: "ACME".to_owned()
/// };
///
/// // my_claims is a struct that implements Serialize
/// // This will create a token using HS256 as algorithm
/// let token = encode(&Header::new(Algorithm::HS256), &my_claims, &EncodingKey::from_secret("secret".as_ref())).unwrap();
/// ```
pub fn encode<T: Serialize>(header: &Header, claims: &T, key: &EncodingKey) -> Result<String> {
    crypto::validate_matching_key(key, header.alg)?;
    let encoded_header = b64_encode_part(&header)?;
    let encoded_claims = b64_encode_part(&claims)?;
    let message = [encoded_header, encoded_claims].join(".");

    let signature = crypto::sign(&message, key, header.alg)?;
    Ok([message, signature].join("."))
}
