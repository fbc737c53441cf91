//! REST gateway for the `/clients` collection.

use crate::gateway::Api;
use crate::model::{Client, ClientDraft};
use async_trait::async_trait;
use desk_framework::{EntityGateway, TransportError};

pub struct ClientGateway {
    api: Api,
}

impl ClientGateway {
    pub fn new(api: Api) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EntityGateway<Client> for ClientGateway {
    async fn list(&self, _scope: &()) -> Result<Vec<Client>, TransportError> {
        self.api.get_json("/clients").await
    }

    async fn fetch(&self, _scope: &(), id: u32) -> Result<Client, TransportError> {
        self.api.get_json(&format!("/clients/{}", id)).await
    }

    async fn create(&self, _scope: &(), draft: ClientDraft) -> Result<Client, TransportError> {
        // id 0 and absent timestamps: the backend fills them in.
        self.api
            .post_json("/clients", &Client::from_draft(0, &draft))
            .await
    }

    async fn update(&self, _scope: &(), id: u32, draft: ClientDraft) -> Result<Client, TransportError> {
        self.api
            .put_json(&format!("/clients/{}", id), &Client::from_draft(id, &draft))
            .await
    }

    async fn delete(&self, _scope: &(), id: u32) -> Result<(), TransportError> {
        self.api.delete(&format!("/clients/{}", id)).await
    }
}
