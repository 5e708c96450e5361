use arena_core::UserId;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Serialize, Clone, Copy, Hash, Eq, PartialEq)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub refer_id: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub user: UserId,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentEntry {
    pub id: EntryId,
    pub user: UserId,
    pub game_id: String,
    pub user_name: String,
    pub phone_number: String,
    pub user_upi: String,
    pub utr_no: Option<String>,
    pub payment_status: PaymentStatus,
}
