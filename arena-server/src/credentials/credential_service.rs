use arena_core::UserId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token issuance failed: {0}")]
    Issue(#[from] jsonwebtoken::errors::Error),
    /// Deliberately generic; verification failures all look the same to the
    /// caller.
    #[error("invalid or expired token")]
    InvalidToken,
}

/// Credential seam: password hashing and bearer-token issuance/verification.
pub trait CredentialService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CredentialError>;
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, CredentialError>;
    fn issue_token(&self, user: &UserId) -> Result<String, CredentialError>;
    fn verify_token(&self, token: &str) -> Result<UserId, CredentialError>;
}
