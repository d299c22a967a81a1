use std::sync::OnceLock;

use chrono::Utc;
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use webtoken::errors::ErrorKind;
use webtoken::{
    crypto::{sign, verify},
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header,
};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Claims {
    sub: String,
    company: String,
    exp: i64,
}

fn my_claims() -> Claims {
    Claims {
        sub: "b@b.com".to_string(),
        company: "ACME".to_string(),
        exp: Utc::now().timestamp() + 10000,
    }
}

// 2048-bit keygen is slow enough that the primary pair is shared across tests
fn test_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap())
}

fn test_pubkey() -> RsaPublicKey {
    test_key().to_public_key()
}

#[test]
fn round_trip_sign_verification() {
    let signature = sign(
        "hello world",
        &EncodingKey::from_rsa(test_key().clone()),
        Algorithm::RS256,
    )
    .unwrap();
    let is_valid = verify(
        &signature,
        "hello world",
        &DecodingKey::from_rsa(test_pubkey()),
        Algorithm::RS256,
    )
    .unwrap();
    assert!(is_valid);
}

#[test]
fn round_trip_claim() {
    let my_claims = my_claims();
    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims,
        &EncodingKey::from_rsa(test_key().clone()),
    )
    .unwrap();
    let token_data =
        decode::<Claims>(&token, &DecodingKey::from_rsa(test_pubkey())).unwrap();
    assert_eq!(my_claims, token_data.claims);
    assert_eq!(token_data.header.alg, Algorithm::RS256);
}

#[test]
fn wrong_key_pair_is_rejected() {
    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims(),
        &EncodingKey::from_rsa(test_key().clone()),
    )
    .unwrap();

    let other_key = RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap();
    let err = decode::<Claims>(&token, &DecodingKey::from_rsa(other_key.to_public_key()))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
}

#[test]
fn tampered_claims_are_rejected() {
    let token = encode(
        &Header::new(Algorithm::RS256),
        &json!({ "sub": "user2" }),
        &EncodingKey::from_rsa(test_key().clone()),
    )
    .unwrap();

    let [header, _, signature]: [&str; 3] =
        token.split('.').collect::<Vec<_>>().try_into().unwrap();
    let forged =
        format!("{}.{}.{}", header, URL_SAFE_NO_PAD.encode(r#"{"sub":"admin"}"#), signature);

    let err = decode::<Value>(&forged, &DecodingKey::from_rsa(test_pubkey())).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
}

#[test]
fn round_trip_through_pkcs8_pem() {
    let private_pem = test_key().to_pkcs8_pem(LineEnding::LF).unwrap();
    let public_pem = test_pubkey().to_public_key_pem(LineEnding::LF).unwrap();

    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims(),
        &EncodingKey::from_rsa_pem(&private_pem).unwrap(),
    )
    .unwrap();
    let token_data =
        decode::<Claims>(&token, &DecodingKey::from_rsa_pem(&public_pem).unwrap()).unwrap();
    assert_eq!(token_data.claims.company, "ACME");
}

#[test]
fn round_trip_through_pkcs1_pem() {
    let private_pem = test_key().to_pkcs1_pem(LineEnding::LF).unwrap();
    let public_pem = test_pubkey().to_pkcs1_pem(LineEnding::LF).unwrap();

    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims(),
        &EncodingKey::from_rsa_pem(&private_pem).unwrap(),
    )
    .unwrap();
    assert!(decode::<Claims>(&token, &DecodingKey::from_rsa_pem(&public_pem).unwrap()).is_ok());
}

#[test]
fn bad_pem_is_an_invalid_key() {
    let err = EncodingKey::from_rsa_pem("not a pem").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidKeyFormat));
    let err = DecodingKey::from_rsa_pem("not a pem").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidKeyFormat));
}

#[test]
fn decode_with_modulus_and_exponent_components() {
    let pubkey = test_pubkey();
    let n = URL_SAFE_NO_PAD.encode(pubkey.n().to_bytes_be());
    let e = URL_SAFE_NO_PAD.encode(pubkey.e().to_bytes_be());

    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims(),
        &EncodingKey::from_rsa(test_key().clone()),
    )
    .unwrap();
    let key = DecodingKey::from_rsa_components(&n, &e).unwrap();
    assert!(decode::<Claims>(&token, &key).is_ok());
}

#[test]
fn rsa_token_never_verifies_against_an_hmac_secret() {
    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims(),
        &EncodingKey::from_rsa(test_key().clone()),
    )
    .unwrap();
    let err = decode::<Claims>(&token, &DecodingKey::from_secret(b"a secret")).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidAlgorithm));
}

#[test]
fn hmac_token_never_verifies_against_an_rsa_key() {
    let token = encode(
        &Header::new(Algorithm::HS256),
        &my_claims(),
        &EncodingKey::from_secret(b"a secret"),
    )
    .unwrap();
    let err = decode::<Claims>(&token, &DecodingKey::from_rsa(test_pubkey())).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidAlgorithm));
}

#[test]
#[should_panic(expected = "InvalidAlgorithm")]
fn encode_with_mismatched_key_family() {
    encode(
        &Header::new(Algorithm::HS256),
        &my_claims(),
        &EncodingKey::from_rsa(test_key().clone()),
    )
    .unwrap();
}
