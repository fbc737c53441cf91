//! The clients screen.

use crate::model::Client;
use desk_framework::{FormClient, FormHandle, FrameworkError};

#[derive(Clone)]
pub struct ClientsScreen {
    handle: FormHandle<Client>,
}

impl ClientsScreen {
    pub fn new(handle: FormHandle<Client>) -> Self {
        Self { handle }
    }

    /// Refreshes the client list from the backend.
    pub async fn load(&self) -> Result<(), FrameworkError> {
        self.handle.load(()).await
    }

    /// Creates a client from the form.
    pub async fn create_client(&self) -> Result<(), FrameworkError> {
        self.handle.create(()).await
    }

    /// Saves the form into the selected client.
    pub async fn update_selected(&self) -> Result<(), FrameworkError> {
        self.handle.update_selected(()).await
    }

    /// Deletes the selected client. The confirmation dialog is the view's
    /// job; by the time this runs the user has already said yes.
    pub async fn delete_selected(&self) -> Result<(), FrameworkError> {
        self.handle.delete_selected(()).await
    }
}

impl FormClient<Client> for ClientsScreen {
    fn handle(&self) -> &FormHandle<Client> {
        &self.handle
    }
}
