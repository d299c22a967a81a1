use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ErrorKind, Result};

/// The algorithms a token can be signed and verified with.
///
/// This set is closed: every signing and verification path matches on it
/// exhaustively, so supporting a new algorithm means adding a variant here
/// and a dispatch arm in [crate::crypto]. The unsigned `"none"` value is not
/// representable and is rejected wherever an algorithm name is parsed.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, Default)]
pub enum Algorithm {
    /// HMAC using SHA-256
    #[default]
    HS256,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_plain::from_str::<Algorithm>(s).map_err(|_| ErrorKind::InvalidAlgorithmName.into())
    }
}
