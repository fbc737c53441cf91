//! The order line-items screen.
//!
//! Scoped to one order at a time: the owning order id is an argument to
//! every operation, supplied by whatever opened the screen (typically the
//! orders screen's selection). The screen never changes order context on
//! its own.

use crate::model::OrderItem;
use desk_framework::{FormClient, FormHandle, FrameworkError};

#[derive(Clone)]
pub struct OrderItemsScreen {
    handle: FormHandle<OrderItem>,
}

impl OrderItemsScreen {
    pub fn new(handle: FormHandle<OrderItem>) -> Self {
        Self { handle }
    }

    /// Loads the line items of `order_id`.
    pub async fn load_for_order(&self, order_id: u32) -> Result<(), FrameworkError> {
        self.handle.load(order_id).await
    }

    /// Adds the form's product to `order_id`.
    pub async fn add_item(&self, order_id: u32) -> Result<(), FrameworkError> {
        self.handle.create(order_id).await
    }

    /// Saves the form into the selected line item of `order_id`.
    pub async fn update_selected(&self, order_id: u32) -> Result<(), FrameworkError> {
        self.handle.update_selected(order_id).await
    }

    /// Removes the selected line item from `order_id`.
    pub async fn remove_selected(&self, order_id: u32) -> Result<(), FrameworkError> {
        self.handle.delete_selected(order_id).await
    }
}

impl FormClient<OrderItem> for OrderItemsScreen {
    fn handle(&self) -> &FormHandle<OrderItem> {
        &self.handle
    }
}
