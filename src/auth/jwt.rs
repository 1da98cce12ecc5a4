use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Session tokens are valid for 24 hours from issuance.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64, name: String, role: Role) -> Self {
        Self::issued_at(user_id, name, role, Utc::now())
    }

    pub fn issued_at(user_id: i64, name: String, role: Role, at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            name,
            role,
            iat: at.timestamp(),
            exp: (at + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }
}

/// Every claim is optional on the wire so an absent one is reported as such
/// instead of as a generic decoding failure.
#[derive(Debug, Deserialize, Clone)]
struct WireClaims {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    iat: Option<i64>,
    exp: Option<i64>,
}

impl TryFrom<WireClaims> for Claims {
    type Error = TokenError;

    fn try_from(wire: WireClaims) -> Result<Self, Self::Error> {
        match (wire.user_id, wire.name, wire.role, wire.exp) {
            (Some(user_id), Some(name), Some(role), Some(exp)) => Ok(Claims {
                user_id,
                name,
                role,
                iat: wire.iat.unwrap_or_default(),
                exp,
            }),
            _ => Err(TokenError::MissingClaim),
        }
    }
}

#[derive(Debug)]
pub enum TokenError {
    MissingHeader,
    MalformedHeader,
    InvalidSignature,
    UnsupportedAlgorithm,
    Expired,
    MissingClaim,
    Malformed,
    MissingSecret,
    Signing(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::MissingHeader => write!(f, "Header otorisasi tidak ditemukan"),
            TokenError::MalformedHeader => write!(
                f,
                "Format token tidak valid. Gunakan format 'Bearer <token>'"
            ),
            TokenError::InvalidSignature => write!(f, "Tanda tangan token tidak valid"),
            TokenError::UnsupportedAlgorithm => write!(f, "Metode signing token tidak didukung"),
            TokenError::Expired => write!(f, "Token sudah kedaluwarsa"),
            TokenError::MissingClaim => write!(f, "Klaim token tidak lengkap"),
            TokenError::Malformed => write!(f, "Token tidak valid"),
            TokenError::MissingSecret => write!(f, "Kesalahan konfigurasi server"),
            TokenError::Signing(_) => write!(f, "Gagal membuat token"),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => TokenError::UnsupportedAlgorithm,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::MissingRequiredClaim(_) => TokenError::MissingClaim,
            _ => TokenError::Malformed,
        }
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<WireClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Claims::try_from(data.claims)
}
