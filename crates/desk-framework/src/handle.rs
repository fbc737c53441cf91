//! # View-Model Handle
//!
//! The client half of a view-model: [`FormState`] is the bundle of
//! observable cells a UI binds to, and [`FormHandle`] is the cheap-to-clone
//! interface that sends requests to the actor and awaits their completion.
//!
//! # Architecture Note
//! Reads and writes travel different paths. Writes go through the
//! mailbox so the actor remains the single writer; reads come straight from
//! the shared cells, because the cells are only ever written by that same
//! actor and are therefore always internally consistent. This is the
//! "observable property" contract with the single-writer discipline made
//! explicit.

use crate::cell::Cell;
use crate::entity::FormEntity;
use crate::error::FrameworkError;
use crate::form::Form;
use crate::message::{Ack, FormRequest};
use tokio::sync::{mpsc, watch};

/// The observable state of one screen: everything a view layer renders.
#[derive(Clone)]
pub struct FormState<E: FormEntity> {
    /// Authoritative list, replaced wholesale on every mutation.
    pub items: Cell<Vec<E>>,
    /// The selected entity, if any (a clone of the selected row).
    pub selected: Cell<Option<E>>,
    /// Derived: `selected` is non-empty. Kept as its own cell so a button's
    /// enabled-state can bind to it directly.
    pub has_selection: Cell<bool>,
    /// Human-readable status line; doubles as the display-only error channel.
    pub status: Cell<String>,
    /// The editable form fields.
    pub form: Form,
}

impl<E: FormEntity> FormState<E> {
    pub(crate) fn new() -> Self {
        Self {
            items: Cell::new(Vec::new()),
            selected: Cell::new(None),
            has_selection: Cell::new(false),
            status: Cell::new(String::new()),
            form: Form::new(E::schema()),
        }
    }
}

/// A type-safe client for interacting with a [`FormViewModel`](crate::FormViewModel).
///
/// All operation methods resolve once the actor has settled state for the
/// request; their only error is [`FrameworkError`] when the actor is gone.
/// Operation failures (validation, transport) are reported through
/// [`FormState::status`] alone.
#[derive(Clone)]
pub struct FormHandle<E: FormEntity> {
    sender: mpsc::Sender<FormRequest<E>>,
    state: FormState<E>,
}

impl<E: FormEntity> FormHandle<E> {
    pub(crate) fn new(sender: mpsc::Sender<FormRequest<E>>, state: FormState<E>) -> Self {
        Self { sender, state }
    }

    async fn request(
        &self,
        make: impl FnOnce(Ack) -> FormRequest<E>,
    ) -> Result<(), FrameworkError> {
        let (done, completed) = tokio::sync::oneshot::channel();
        self.sender
            .send(make(done))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        completed.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Replaces the list from the backend; progress lands in the status cell.
    pub async fn load(&self, scope: E::Scope) -> Result<(), FrameworkError> {
        self.request(|done| FormRequest::Load { scope, done }).await
    }

    /// Validates the form and creates a new entity from it.
    pub async fn create(&self, scope: E::Scope) -> Result<(), FrameworkError> {
        self.request(|done| FormRequest::Create { scope, done })
            .await
    }

    /// Validates the form and updates the selected entity.
    pub async fn update_selected(&self, scope: E::Scope) -> Result<(), FrameworkError> {
        self.request(|done| FormRequest::UpdateSelected { scope, done })
            .await
    }

    /// Deletes the selected entity.
    pub async fn delete_selected(&self, scope: E::Scope) -> Result<(), FrameworkError> {
        self.request(|done| FormRequest::DeleteSelected { scope, done })
            .await
    }

    /// Selects a row by index, or clears the selection with `None`.
    pub async fn select(&self, index: Option<usize>) -> Result<(), FrameworkError> {
        self.request(|done| FormRequest::Select { index, done })
            .await
    }

    /// Writes one form field and runs its live validation.
    pub async fn set_field(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), FrameworkError> {
        let (name, value) = (name.into(), value.into());
        self.request(|done| FormRequest::SetField { name, value, done })
            .await
    }

    // --- Reads ---

    pub fn state(&self) -> &FormState<E> {
        &self.state
    }

    pub fn items(&self) -> Vec<E> {
        self.state.items.get()
    }

    pub fn selected(&self) -> Option<E> {
        self.state.selected.get()
    }

    pub fn has_selection(&self) -> bool {
        self.state.has_selection.get()
    }

    pub fn status(&self) -> String {
        self.state.status.get()
    }

    /// Current value of a form field; empty for unknown names.
    pub fn field(&self, name: &str) -> String {
        self.state.form.value(name)
    }

    /// Subscription to the status line (for a bound status bar).
    pub fn watch_status(&self) -> watch::Receiver<String> {
        self.state.status.subscribe()
    }

    /// Subscription to the list (for a bound table).
    pub fn watch_items(&self) -> watch::Receiver<Vec<E>> {
        self.state.items.subscribe()
    }
}
