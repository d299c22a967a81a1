use chrono::Utc;
use serde::{Deserialize, Serialize};
use webtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header};

/// Our claims struct, it needs to derive `Serialize` and/or `Deserialize`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Claims {
    sub: String,
    name: String,
    iat: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let my_claims = Claims {
        sub: "user1".to_string(),
        name: "John Doe".to_string(),
        iat: Utc::now().timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &my_claims,
        &EncodingKey::from_secret(b"a secret"),
    )?;

    println!("Our encoded token: {token}");

    let token_data = decode::<Claims>(&token, &DecodingKey::from_secret(b"a secret"))?;

    assert_eq!(my_claims, token_data.claims);

    println!("Our decoded token: {:?}", token_data);

    match decode::<Claims>(&token, &DecodingKey::from_secret(b"wrong secret")) {
        Ok(_) => unreachable!(),
        Err(err) => println!("Wrong secret is rejected: {err}"),
    }

    Ok(())
}
