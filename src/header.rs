use serde::{Deserialize, Serialize};

use crate::Algorithm;

/// The header of a token: the algorithm it is signed with plus a few
/// optional, caller-supplied fields.
///
/// The header is serialized as-is into the first token segment; during
/// verification the `alg` value drives signature dispatch, everything else
/// is passed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// The algorithm the token is signed with
    pub alg: Algorithm,
    /// The token media type, conventionally `"JWT"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Content type of the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cty: Option<String>,
    /// Key id, for callers that pick a verification key per token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl Header {
    /// Returns a `"JWT"`-typed header for the algorithm given
    pub fn new(alg: Algorithm) -> Self {
        Header { alg, typ: Some("JWT".to_string()), cty: None, kid: None }
    }
}

impl Default for Header {
    fn default() -> Self {
        Header::new(Algorithm::default())
    }
}
