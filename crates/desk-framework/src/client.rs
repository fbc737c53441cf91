//! # FormClient Trait
//!
//! Provides a common interface for screen-specific wrappers, adding default
//! read and edit methods built on top of a generic [`FormHandle`].
//!
//! A screen wrapper owns a `FormHandle<E>` and exposes the operations under
//! domain names (`load_clients`, `add_item`, ...); everything that is
//! identical across screens (selection, field edits, the observable reads)
//! comes from this trait for free.

use crate::entity::FormEntity;
use crate::error::FrameworkError;
use crate::handle::FormHandle;
use async_trait::async_trait;

/// Trait for screen-specific clients to inherit the standard surface.
#[async_trait]
pub trait FormClient<E: FormEntity>: Send + Sync {
    /// Access the inner generic handle.
    fn handle(&self) -> &FormHandle<E>;

    /// Selects a row by index.
    async fn select(&self, index: usize) -> Result<(), FrameworkError> {
        self.handle().select(Some(index)).await
    }

    /// Clears the selection, resetting the form to defaults.
    async fn clear_selection(&self) -> Result<(), FrameworkError> {
        self.handle().select(None).await
    }

    /// Writes one form field (a bound widget edit).
    async fn set_field(&self, name: &str, value: &str) -> Result<(), FrameworkError> {
        self.handle().set_field(name, value).await
    }

    fn items(&self) -> Vec<E> {
        self.handle().items()
    }

    fn selected(&self) -> Option<E> {
        self.handle().selected()
    }

    fn has_selection(&self) -> bool {
        self.handle().has_selection()
    }

    fn status(&self) -> String {
        self.handle().status()
    }

    fn field(&self, name: &str) -> String {
        self.handle().field(name)
    }
}
