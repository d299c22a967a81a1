use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::errors::{new_error, ErrorKind, Result};
use crate::serialization::{b64_decode, b64_encode};

/// The actual RS256 signing + encoding: PKCS#1 v1.5 over the SHA-256 digest
/// of the message.
pub(crate) fn sign(key: &RsaPrivateKey, message: &str) -> Result<String> {
    let digest = Sha256::digest(message.as_bytes());
    let signature = key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest)?;
    Ok(b64_encode(signature))
}

/// Checks a signature against the RSA public key. The signature segment is
/// decoded back to raw bytes before the primitive sees it.
pub(crate) fn verify(signature: &str, message: &str, key: &RsaPublicKey) -> Result<bool> {
    let signature_bytes =
        b64_decode(signature).map_err(|_| new_error(ErrorKind::InvalidSignature))?;
    let digest = Sha256::digest(message.as_bytes());
    Ok(key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature_bytes).is_ok())
}
