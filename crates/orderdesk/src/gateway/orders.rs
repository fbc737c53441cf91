//! REST gateway for the `/orders` collection.

use crate::gateway::Api;
use crate::model::{Order, OrderDraft};
use async_trait::async_trait;
use desk_framework::{EntityGateway, TransportError};

pub struct OrderGateway {
    api: Api,
}

impl OrderGateway {
    pub fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EntityGateway<Order> for OrderGateway {
    async fn list(&self, _scope: &()) -> Result<Vec<Order>, TransportError> {
        self.api.get_json("/orders").await
    }

    async fn fetch(&self, _scope: &(), id: u32) -> Result<Order, TransportError> {
        self.api.get_json(&format!("/orders/{}", id)).await
    }

    async fn create(&self, _scope: &(), draft: OrderDraft) -> Result<Order, TransportError> {
        // Amounts go out as zeros; backend triggers recalculate the totals.
        self.api
            .post_json("/orders", &Order::from_draft(0, &draft))
            .await
    }

    async fn update(&self, _scope: &(), id: u32, draft: OrderDraft) -> Result<Order, TransportError> {
        self.api
            .put_json(&format!("/orders/{}", id), &Order::from_draft(id, &draft))
            .await
    }

    async fn delete(&self, _scope: &(), id: u32) -> Result<(), TransportError> {
        self.api.delete(&format!("/orders/{}", id)).await
    }
}
