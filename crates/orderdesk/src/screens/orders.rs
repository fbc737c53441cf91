//! The orders screen.

use crate::model::Order;
use desk_framework::{FormClient, FormHandle, FrameworkError};

#[derive(Clone)]
pub struct OrdersScreen {
    handle: FormHandle<Order>,
}

impl OrdersScreen {
    pub fn new(handle: FormHandle<Order>) -> Self {
        Self { handle }
    }

    pub async fn load(&self) -> Result<(), FrameworkError> {
        self.handle.load(()).await
    }

    pub async fn create_order(&self) -> Result<(), FrameworkError> {
        self.handle.create(()).await
    }

    pub async fn update_selected(&self) -> Result<(), FrameworkError> {
        self.handle.update_selected(()).await
    }

    pub async fn delete_selected(&self) -> Result<(), FrameworkError> {
        self.handle.delete_selected(()).await
    }
}

impl FormClient<Order> for OrdersScreen {
    fn handle(&self) -> &FormHandle<Order> {
        &self.handle
    }
}
