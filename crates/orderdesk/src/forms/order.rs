//! Form contract for the orders screen.
//!
//! Orders have no live field checks; validation happens at submit. Status,
//! payment method, and currency default to the values a fresh order form
//! shows, and the amount fields are display-only mirrors of server-computed
//! values.

use crate::model::{Order, OrderDraft};
use desk_framework::{field, FieldCheck, FieldSpec, Form, FormEntity, ValidationError};

static SCHEMA: [FieldSpec; 15] = [
    field("order_number", ""),
    field("client_id", "0"),
    field("order_date", ""),
    field("order_status", "pending"),
    field("payment_method", "credit_card"),
    field("currency_code", "EUR"),
    field("subtotal_amount", "0"),
    field("discount_amount", "0"),
    field("tax_amount", "0"),
    field("total_amount", "0"),
    field("shipping_address", ""),
    field("billing_address", ""),
    field("notes", ""),
    field("created_at", ""),
    field("updated_at", ""),
];

impl FormEntity for Order {
    type Draft = OrderDraft;
    type Scope = ();

    const NOUN: &'static str = "order";
    const PLURAL: &'static str = "orders";

    fn schema() -> &'static [FieldSpec] {
        &SCHEMA
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn fill(&self, form: &Form) {
        form.set("order_number", self.order_number.clone());
        form.set("client_id", self.client_id.to_string());
        form.set("order_date", self.order_date.clone().unwrap_or_default());
        form.set("order_status", self.order_status.clone());
        form.set("payment_method", self.payment_method.clone());
        form.set("currency_code", self.currency_code.clone());
        form.set("subtotal_amount", self.subtotal_amount.to_string());
        form.set("discount_amount", self.discount_amount.to_string());
        form.set("tax_amount", self.tax_amount.to_string());
        form.set("total_amount", self.total_amount.to_string());
        form.set(
            "shipping_address",
            self.shipping_address.clone().unwrap_or_default(),
        );
        form.set(
            "billing_address",
            self.billing_address.clone().unwrap_or_default(),
        );
        form.set("notes", self.notes.clone().unwrap_or_default());
        form.set("created_at", self.created_at.clone().unwrap_or_default());
        form.set("updated_at", self.updated_at.clone().unwrap_or_default());
    }

    fn check_field(_name: &str, _value: &str) -> FieldCheck {
        FieldCheck::Skipped
    }

    fn draft(form: &Form) -> Result<OrderDraft, ValidationError> {
        let order_number = form.value("order_number").trim().to_string();
        if order_number.is_empty() {
            return Err(ValidationError("Order number is required".to_string()));
        }
        let client_id = form
            .value("client_id")
            .trim()
            .parse::<i64>()
            .unwrap_or_default();
        if client_id <= 0 {
            return Err(ValidationError("Valid client ID is required".to_string()));
        }
        Ok(OrderDraft {
            order_number,
            client_id: client_id as u32,
            order_status: form.value("order_status").trim().to_string(),
            payment_method: form.value("payment_method").trim().to_string(),
            currency_code: form.value("currency_code").trim().to_string(),
            shipping_address: form.value("shipping_address").trim().to_string(),
            billing_address: form.value("billing_address").trim().to_string(),
            notes: form.value("notes").trim().to_string(),
        })
    }
}
