//! The products screen.

use crate::model::Product;
use desk_framework::{FormClient, FormHandle, FrameworkError};

#[derive(Clone)]
pub struct ProductsScreen {
    handle: FormHandle<Product>,
}

impl ProductsScreen {
    pub fn new(handle: FormHandle<Product>) -> Self {
        Self { handle }
    }

    pub async fn load(&self) -> Result<(), FrameworkError> {
        self.handle.load(()).await
    }

    pub async fn create_product(&self) -> Result<(), FrameworkError> {
        self.handle.create(()).await
    }

    pub async fn update_selected(&self) -> Result<(), FrameworkError> {
        self.handle.update_selected(()).await
    }

    pub async fn delete_selected(&self) -> Result<(), FrameworkError> {
        self.handle.delete_selected(()).await
    }
}

impl FormClient<Product> for ProductsScreen {
    fn handle(&self) -> &FormHandle<Product> {
        &self.handle
    }
}
