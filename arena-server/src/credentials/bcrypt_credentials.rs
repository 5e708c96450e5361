use crate::credentials::credential_service::{CredentialError, CredentialService};
use arena_core::UserId;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const TOKEN_LIFETIME_SECS: u64 = 24 * 60 * 60;
const BCRYPT_COST: u32 = 10;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    user_id: UserId,
    iat: u64,
    exp: u64,
}

/// bcrypt password hashes plus HS256 bearer tokens with a 24h lifetime.
pub struct BcryptCredentials {
    secret: String,
}

impl BcryptCredentials {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

impl CredentialService for BcryptCredentials {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        Ok(bcrypt::hash(password, BCRYPT_COST)?)
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError> {
        Ok(bcrypt::verify(password, password_hash)?)
    }

    fn issue_token(&self, user: &UserId) -> Result<String, CredentialError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let claims = Claims {
            user_id: *user,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };
        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?)
    }

    fn verify_token(&self, token: &str) -> Result<UserId, CredentialError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| CredentialError::InvalidToken)?;
        Ok(data.claims.user_id)
    }
}
