//! REST gateway for order line items, nested under their owning order:
//! `/orders/{order_id}/products[/{item_id}]`.

use crate::gateway::Api;
use crate::model::{OrderItem, OrderItemDraft};
use async_trait::async_trait;
use desk_framework::{EntityGateway, TransportError};

pub struct OrderItemGateway {
    api: Api,
}

impl OrderItemGateway {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    fn collection(order_id: u32) -> String {
        format!("/orders/{}/products", order_id)
    }

    fn item(order_id: u32, item_id: u32) -> String {
        format!("/orders/{}/products/{}", order_id, item_id)
    }
}

#[async_trait]
impl EntityGateway<OrderItem> for OrderItemGateway {
    async fn list(&self, order_id: &u32) -> Result<Vec<OrderItem>, TransportError> {
        self.api.get_json(&Self::collection(*order_id)).await
    }

    async fn fetch(&self, order_id: &u32, id: u32) -> Result<OrderItem, TransportError> {
        self.api.get_json(&Self::item(*order_id, id)).await
    }

    async fn create(
        &self,
        order_id: &u32,
        draft: OrderItemDraft,
    ) -> Result<OrderItem, TransportError> {
        // line_total goes out as zero; the backend computes it.
        self.api
            .post_json(
                &Self::collection(*order_id),
                &OrderItem::from_draft(0, *order_id, &draft),
            )
            .await
    }

    async fn update(
        &self,
        order_id: &u32,
        id: u32,
        draft: OrderItemDraft,
    ) -> Result<OrderItem, TransportError> {
        self.api
            .put_json(
                &Self::item(*order_id, id),
                &OrderItem::from_draft(id, *order_id, &draft),
            )
            .await
    }

    async fn delete(&self, order_id: &u32, id: u32) -> Result<(), TransportError> {
        self.api.delete(&Self::item(*order_id, id)).await
    }
}
