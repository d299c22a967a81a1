use std::error::Error as StdError;
use std::fmt;
use std::result;

/// A crate-local `Result` alias, used by every fallible operation.
pub type Result<T> = result::Result<T, Error>;

/// An error that can happen while encoding, decoding or verifying a token.
///
/// The underlying [ErrorKind] is boxed to keep the happy path cheap; use
/// [`kind`](Error::kind) or [`into_kind`](Error::into_kind) to inspect it.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    /// The kind of error that happened
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Unwrap the error into its kind
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }
}

pub(crate) fn new_error(kind: ErrorKind) -> Error {
    Error(Box::new(kind))
}

/// The specific type of an error.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The token does not have the shape `header.claims.signature` with three
    /// non-empty segments
    InvalidToken,
    /// The signature does not match the header and claims. Deliberately carries
    /// no detail: a wrong key and tampered content are indistinguishable
    InvalidSignature,
    /// The `alg` value is not the name of a supported algorithm
    InvalidAlgorithmName,
    /// The `alg` field is missing, or the algorithm does not match the key
    /// family it is being used with
    InvalidAlgorithm,
    /// Key material could not be parsed (bad PEM, bad RSA components, bad
    /// HMAC key)
    InvalidKeyFormat,

    // Wrapped errors from the crates we use
    /// An RSA primitive failed
    Crypto(rsa::errors::Error),
    /// A segment is not valid base64url
    Base64(base64::DecodeError),
    /// A decoded segment is not valid JSON, or claims do not fit the target
    /// type
    Json(serde_json::Error),
    /// A decoded segment is not valid UTF-8
    Utf8(::std::string::FromUtf8Error),
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.0 {
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidKeyFormat => None,
            ErrorKind::Crypto(err) => Some(err),
            ErrorKind::Base64(err) => Some(err),
            ErrorKind::Json(err) => Some(err),
            ErrorKind::Utf8(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            ErrorKind::InvalidToken => write!(f, "invalid token"),
            ErrorKind::InvalidSignature => write!(f, "invalid signature"),
            ErrorKind::InvalidAlgorithmName => write!(f, "algorithm is not supported"),
            ErrorKind::InvalidAlgorithm => {
                write!(f, "algorithm is missing or does not match the key")
            }
            ErrorKind::InvalidKeyFormat => write!(f, "key could not be parsed"),
            ErrorKind::Crypto(err) => write!(f, "rsa error: {}", err),
            ErrorKind::Base64(err) => write!(f, "base64 error: {}", err),
            ErrorKind::Json(err) => write!(f, "json error: {}", err),
            ErrorKind::Utf8(err) => write!(f, "utf-8 error: {}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        new_error(kind)
    }
}

impl From<rsa::errors::Error> for Error {
    fn from(err: rsa::errors::Error) -> Error {
        new_error(ErrorKind::Crypto(err))
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Error {
        new_error(ErrorKind::Base64(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        new_error(ErrorKind::Json(err))
    }
}

impl From<::std::string::FromUtf8Error> for Error {
    fn from(err: ::std::string::FromUtf8Error) -> Error {
        new_error(ErrorKind::Utf8(err))
    }
}
