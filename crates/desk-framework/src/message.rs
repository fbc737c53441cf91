//! # View-Model Messages
//!
//! The mailbox protocol between a [`FormHandle`](crate::FormHandle) and its
//! [`FormViewModel`](crate::FormViewModel) actor.
//!
//! Each request carries an [`Ack`]: a oneshot fired once the actor has
//! finished the operation and settled all observable state. Callers await
//! the ack for structured completion, but operation *results* never travel
//! on it; success and failure are reported exclusively through the status
//! cell, which is what a bound status bar renders.

use crate::entity::FormEntity;
use tokio::sync::oneshot;

/// Completion signal for one request.
pub type Ack = oneshot::Sender<()>;

/// Requests a view-model actor processes, one at a time, in arrival order.
///
/// The CRUD operations mirror the screen's buttons; `Select` and `SetField`
/// are the bound table row click and text-field edit. Update and delete act
/// on the current selection, which is why they carry no id.
#[derive(Debug)]
pub enum FormRequest<E: FormEntity> {
    /// Replace the authoritative list from the backend.
    Load { scope: E::Scope, done: Ack },
    /// Validate the form and create a new entity.
    Create { scope: E::Scope, done: Ack },
    /// Validate the form and update the selected entity.
    UpdateSelected { scope: E::Scope, done: Ack },
    /// Delete the selected entity. Confirmation is the caller's concern and
    /// is assumed to have happened already.
    DeleteSelected { scope: E::Scope, done: Ack },
    /// Change the selection; `None` clears it. Fires the selection
    /// transition either way.
    Select { index: Option<usize>, done: Ack },
    /// Write one form field and run its live validation.
    SetField {
        name: String,
        value: String,
        done: Ack,
    },
}
