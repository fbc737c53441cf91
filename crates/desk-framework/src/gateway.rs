//! # Entity Gateway
//!
//! The seam between a view-model and the remote backend. Each entity type
//! gets a thin gateway translating method calls into REST requests; the
//! view-model actor only ever sees this trait, which is what makes the
//! protocol testable with [`MockGateway`](crate::mock::MockGateway).
//!
//! Every operation carries the entity's [`Scope`](crate::FormEntity::Scope):
//! `()` for top-level collections, the owning order id for line items (the
//! backend nests those routes under the order).

use crate::entity::FormEntity;
use crate::error::TransportError;
use async_trait::async_trait;

/// Remote CRUD operations for one entity type.
///
/// # Contract
/// - `create` sends the record with id `0` and server-owned fields
///   absent/zeroed; the backend assigns the id and timestamps and returns
///   the full record.
/// - `update` returns the authoritative post-update record (the backend may
///   have recomputed derived fields such as order totals).
/// - A missing entity is a [`TransportError::Status`] with a 4xx code.
#[async_trait]
pub trait EntityGateway<E: FormEntity>: Send + Sync + 'static {
    async fn list(&self, scope: &E::Scope) -> Result<Vec<E>, TransportError>;

    async fn fetch(&self, scope: &E::Scope, id: u32) -> Result<E, TransportError>;

    async fn create(&self, scope: &E::Scope, draft: E::Draft) -> Result<E, TransportError>;

    async fn update(&self, scope: &E::Scope, id: u32, draft: E::Draft)
        -> Result<E, TransportError>;

    async fn delete(&self, scope: &E::Scope, id: u32) -> Result<(), TransportError>;
}
