use chrono::Utc;
use rsa::RsaPrivateKey;
use serde::{Deserialize, Serialize};
use webtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Claims {
    sub: String,
    company: String,
    exp: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // In a real deployment the key pair would come from PEM files; see
    // EncodingKey::from_rsa_pem and DecodingKey::from_rsa_pem.
    let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), 2048)?;
    let public_key = private_key.to_public_key();

    let my_claims = Claims {
        sub: "user2".to_string(),
        company: "ACME".to_string(),
        exp: Utc::now().timestamp() + 10000,
    };

    let token = encode(
        &Header::new(Algorithm::RS256),
        &my_claims,
        &EncodingKey::from_rsa(private_key),
    )?;
    println!("{token}");

    let token_data = decode::<Claims>(&token, &DecodingKey::from_rsa(public_key))?;

    // Claims should be exactly the same when roundtripped
    assert_eq!(my_claims, token_data.claims);
    println!("Token verified: {:?}", token_data.claims);

    Ok(())
}
