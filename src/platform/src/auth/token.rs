use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionClaims {
    pub exp: i64,
    /// External identity id of the signed-in user.
    pub sub: String,
}

pub fn parse_session_token(value: &str, token_key: impl AsRef<[u8]>) -> Result<SessionClaims> {
    let token = decode(
        value,
        &DecodingKey::from_secret(token_key.as_ref()),
        &Validation::new(Algorithm::HS512),
    )?;

    Ok(token.claims)
}

/// Mints a token the way the identity provider would. Used by tests and
/// local development, never by the serving path.
pub fn make_session_token(
    identity_id: impl Into<String>,
    expires: Duration,
    token_key: impl AsRef<[u8]>,
) -> Result<String> {
    let header = Header {
        alg: Algorithm::HS512,
        ..Default::default()
    };
    let claims = SessionClaims {
        exp: (Utc::now() + expires).timestamp(),
        sub: identity_id.into(),
    };
    Ok(encode(
        &header,
        &claims,
        &EncodingKey::from_secret(token_key.as_ref()),
    )?)
}
