#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

/// Lower level functions, if you want to sign or verify something other than
/// a full token
pub mod crypto;
mod decoding;
mod encoding;
/// All the errors that can be encountered while encoding/decoding tokens
pub mod errors;

mod algorithms;
mod header;
mod serialization;

pub use algorithms::Algorithm;
pub use decoding::{decode, decode_header, DecodingKey, TokenData};
pub use encoding::{encode, EncodingKey};
pub use header::Header;
