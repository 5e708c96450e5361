mod bcrypt_credentials;
mod credential_service;

pub use bcrypt_credentials::*;
pub use credential_service::*;
