use crate::store::records::{EntryId, PaymentStatus, ProfileRecord, TournamentEntry, UserRecord};
use crate::store::storage::Storage;
use anyhow::{Result, bail};
use arena_core::UserId;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// In-memory store; the default backend and the test double.
pub struct MemoryStore {
    users: DashMap<UserId, UserRecord>,
    emails: DashMap<String, UserId>,
    profiles: DashMap<UserId, ProfileRecord>,
    entries: DashMap<EntryId, TournamentEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            profiles: DashMap::new(),
            entries: DashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn create_user(&self, user: UserRecord) -> Result<()> {
        match self.emails.entry(user.email.clone()) {
            Entry::Occupied(_) => bail!("email already registered: {}", user.email),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<UserRecord>> {
        Ok(self.users.get(id).map(|user| user.value().clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let Some(id) = self.emails.get(email).map(|id| *id.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }

    async fn set_password(&self, id: &UserId, password_hash: String) -> Result<()> {
        let Some(mut user) = self.users.get_mut(id) else {
            bail!("user not found: {}", id);
        };
        user.password_hash = password_hash;
        Ok(())
    }

    async fn create_profile(&self, profile: ProfileRecord) -> Result<()> {
        self.profiles.insert(profile.user, profile);
        Ok(())
    }

    async fn find_profile(&self, user: &UserId) -> Result<Option<ProfileRecord>> {
        Ok(self.profiles.get(user).map(|profile| profile.value().clone()))
    }

    async fn save_entry(&self, entry: TournamentEntry) -> Result<()> {
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    async fn pending_entry_for(&self, user: &UserId) -> Result<Option<TournamentEntry>> {
        Ok(self
            .entries
            .iter()
            .find(|entry| {
                let entry = entry.value();
                entry.user == *user && entry.payment_status == PaymentStatus::Pending
            })
            .map(|entry| entry.value().clone()))
    }

    async fn update_entry_status(
        &self,
        id: &EntryId,
        status: PaymentStatus,
        utr_no: Option<String>,
    ) -> Result<()> {
        let Some(mut entry) = self.entries.get_mut(id) else {
            bail!("tournament entry not found: {}", id);
        };
        entry.payment_status = status;
        entry.utr_no = utr_no;
        Ok(())
    }
}
