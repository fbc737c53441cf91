use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// `provider_id` is genuinely optional: a product with no provider carries
/// `None`, never a zero sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: u32,
    pub provider_id: Option<u32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Validated submit payload for a product form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: u32,
    pub provider_id: Option<u32>,
}

impl Product {
    pub fn from_draft(id: u32, draft: &ProductDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            stock: draft.stock,
            provider_id: draft.provider_id,
            created_at: None,
            updated_at: None,
        }
    }
}
