use crate::store::records::{EntryId, PaymentStatus, ProfileRecord, TournamentEntry, UserRecord};
use anyhow::Result;
use arena_core::UserId;
use async_trait::async_trait;

/// Persistence seam. The server holds no invariants over this data beyond
/// "record exists or does not"; a document store slots in behind it.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, user: UserRecord) -> Result<()>;
    async fn find_user(&self, id: &UserId) -> Result<Option<UserRecord>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>>;
    async fn set_password(&self, id: &UserId, password_hash: String) -> Result<()>;

    async fn create_profile(&self, profile: ProfileRecord) -> Result<()>;
    async fn find_profile(&self, user: &UserId) -> Result<Option<ProfileRecord>>;

    async fn save_entry(&self, entry: TournamentEntry) -> Result<()>;
    async fn pending_entry_for(&self, user: &UserId) -> Result<Option<TournamentEntry>>;
    async fn update_entry_status(
        &self,
        id: &EntryId,
        status: PaymentStatus,
        utr_no: Option<String>,
    ) -> Result<()>;
}
