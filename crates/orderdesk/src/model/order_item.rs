use serde::{Deserialize, Serialize};

/// One line item of an order.
///
/// `order_id` is fixed by the order the screen is scoped to; it is never an
/// editable field. `line_total` is always server-computed (quantity times
/// unit price) and never derived client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Validated submit payload for a line-item form. The owning order id comes
/// from the operation scope, not from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemDraft {
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn from_draft(id: u32, order_id: u32, draft: &OrderItemDraft) -> Self {
        Self {
            id,
            order_id,
            product_id: draft.product_id,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            line_total: 0.0,
        }
    }
}
