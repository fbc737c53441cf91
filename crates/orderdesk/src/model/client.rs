use serde::{Deserialize, Serialize};

/// A customer record.
///
/// `created_at`/`updated_at` are server-set timestamps carried as opaque
/// strings; the client never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Validated submit payload for a client form.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Client {
    /// Wire form of a draft. `id` is 0 on create; timestamps stay absent so
    /// the backend fills them.
    pub fn from_draft(id: u32, draft: &ClientDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}
