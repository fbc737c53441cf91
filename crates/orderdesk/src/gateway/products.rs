//! REST gateway for the `/products` collection.

use crate::gateway::Api;
use crate::model::{Product, ProductDraft};
use async_trait::async_trait;
use desk_framework::{EntityGateway, TransportError};

pub struct ProductGateway {
    api: Api,
}

impl ProductGateway {
    pub fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EntityGateway<Product> for ProductGateway {
    async fn list(&self, _scope: &()) -> Result<Vec<Product>, TransportError> {
        self.api.get_json("/products").await
    }

    async fn fetch(&self, _scope: &(), id: u32) -> Result<Product, TransportError> {
        self.api.get_json(&format!("/products/{}", id)).await
    }

    async fn create(&self, _scope: &(), draft: ProductDraft) -> Result<Product, TransportError> {
        self.api
            .post_json("/products", &Product::from_draft(0, &draft))
            .await
    }

    async fn update(
        &self,
        _scope: &(),
        id: u32,
        draft: ProductDraft,
    ) -> Result<Product, TransportError> {
        self.api
            .put_json(&format!("/products/{}", id), &Product::from_draft(id, &draft))
            .await
    }

    async fn delete(&self, _scope: &(), id: u32) -> Result<(), TransportError> {
        self.api.delete(&format!("/products/{}", id)).await
    }
}
