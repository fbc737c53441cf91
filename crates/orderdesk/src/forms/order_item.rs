//! Form contract for the order line-items screen.
//!
//! This screen is scoped to one order: every operation carries the owning
//! order id, and the item's parent is never editable. The screen also
//! phrases its status lines as "adding/removing products", so most of the
//! status vocabulary is overridden here.

use crate::forms::{check_count, check_number, require_number};
use crate::model::{OrderItem, OrderItemDraft};
use desk_framework::{field, FieldCheck, FieldSpec, Form, FormEntity, ValidationError};

static SCHEMA: [FieldSpec; 4] = [
    field("product_id", "0"),
    field("quantity", "1"),
    field("unit_price", "0"),
    field("line_total", "0"),
];

impl FormEntity for OrderItem {
    type Draft = OrderItemDraft;
    /// The owning order's id.
    type Scope = u32;

    const NOUN: &'static str = "item";
    const PLURAL: &'static str = "items";

    fn schema() -> &'static [FieldSpec] {
        &SCHEMA
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn fill(&self, form: &Form) {
        form.set("product_id", self.product_id.to_string());
        form.set("quantity", self.quantity.to_string());
        form.set("unit_price", self.unit_price.to_string());
        form.set("line_total", self.line_total.to_string());
    }

    fn check_field(name: &str, value: &str) -> FieldCheck {
        match name {
            "quantity" => check_count("Quantity", value),
            "unit_price" => check_number("Unit price", value),
            _ => FieldCheck::Skipped,
        }
    }

    fn draft(form: &Form) -> Result<OrderItemDraft, ValidationError> {
        let product_id = form
            .value("product_id")
            .trim()
            .parse::<i64>()
            .unwrap_or_default();
        if product_id <= 0 {
            return Err(ValidationError("Valid product ID required".to_string()));
        }
        let quantity = form
            .value("quantity")
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError("Quantity must be an integer".to_string()))?;
        if quantity <= 0 {
            return Err(ValidationError("Quantity must be positive".to_string()));
        }
        let unit_price = require_number("Unit price", &form.value("unit_price"))?;
        Ok(OrderItemDraft {
            product_id: product_id as u32,
            quantity: quantity as u32,
            unit_price,
        })
    }

    fn loading_status(scope: &u32) -> String {
        format!("Loading products for order {}...", scope)
    }

    fn creating_status(_scope: &u32) -> String {
        "Adding product to order...".to_string()
    }

    fn created_status(&self, scope: &u32) -> String {
        format!("Added product ID {} to order {}", self.product_id, scope)
    }

    fn updating_status() -> String {
        "Updating product in order...".to_string()
    }

    fn deleting_status() -> String {
        "Removing product from order...".to_string()
    }

    fn deleted_status(id: u32) -> String {
        format!("Removed item ID {}", id)
    }

    fn create_failed_status(error: &dyn std::fmt::Display) -> String {
        format!("Add failed: {}", error)
    }

    fn delete_failed_status(error: &dyn std::fmt::Display) -> String {
        format!("Remove failed: {}", error)
    }
}
