use serde::{Deserialize, Serialize};

/// A customer order.
///
/// The four amount fields are computed by the backend from the order's line
/// items; the client sends zeros on create/update and takes whatever comes
/// back as truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub order_number: String,
    pub client_id: u32,
    pub order_date: Option<String>,
    pub order_status: String,
    pub payment_method: String,
    pub currency_code: String,
    pub subtotal_amount: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub shipping_address: Option<String>,
    pub billing_address: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Validated submit payload for an order form.
///
/// Addresses and notes pass through as entered (possibly empty); unlike the
/// client form's optionals they are not null-ed out when blank.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order_number: String,
    pub client_id: u32,
    pub order_status: String,
    pub payment_method: String,
    pub currency_code: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub notes: String,
}

impl Order {
    /// Wire form of a draft: amounts zeroed (the backend recalculates),
    /// dates and timestamps absent.
    pub fn from_draft(id: u32, draft: &OrderDraft) -> Self {
        Self {
            id,
            order_number: draft.order_number.clone(),
            client_id: draft.client_id,
            order_date: None,
            order_status: draft.order_status.clone(),
            payment_method: draft.payment_method.clone(),
            currency_code: draft.currency_code.clone(),
            subtotal_amount: 0.0,
            discount_amount: 0.0,
            tax_amount: 0.0,
            total_amount: 0.0,
            shipping_address: Some(draft.shipping_address.clone()),
            billing_address: Some(draft.billing_address.clone()),
            notes: Some(draft.notes.clone()),
            created_at: None,
            updated_at: None,
        }
    }
}
