//! # Generic View-Model Actor
//!
//! This module defines [`FormViewModel`], the single-writer actor behind
//! every screen. It owns the authoritative list, the selection, the form,
//! and the status line, and it is the only code that mutates them.
//!
//! # Architecture Note
//! **Concurrency model**: the actor processes one request at a time, and a
//! gateway call is awaited *inside* the turn that issued it. That one
//! decision carries the whole consistency story:
//!
//! - No locks: nothing else can touch the state while a turn runs.
//! - Replace-at-index is safe: the selection cannot drift between reading
//!   the selected row and writing the response back, because nothing else
//!   runs in between.
//! - Overlapping `load()` requests are serialized by the mailbox. Both
//!   complete, in arrival order, and the list reflects the later response.
//!   The original desktop client left concurrent loads racing; serialization
//!   is this implementation's documented answer, not a silent fix.
//!
//! Failures of any gateway call are folded into the status cell and go no
//! further; nothing a backend does can crash a screen.

use crate::entity::{FieldCheck, FormEntity};
use crate::gateway::EntityGateway;
use crate::handle::{FormHandle, FormState};
use crate::message::FormRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that runs one screen's synchronization protocol.
///
/// Created in a pair with its [`FormHandle`]; the handle side is what the
/// application keeps, the actor side is spawned onto the runtime:
///
/// ```ignore
/// let (vm, handle) = FormViewModel::new(gateway, 32);
/// tokio::spawn(vm.run());
/// handle.load(()).await?;
/// ```
pub struct FormViewModel<E: FormEntity, G: EntityGateway<E>> {
    receiver: mpsc::Receiver<FormRequest<E>>,
    gateway: G,
    state: FormState<E>,
    items: Vec<E>,
    selected: Option<usize>,
}

impl<E: FormEntity, G: EntityGateway<E>> FormViewModel<E, G> {
    /// Creates the actor and its handle.
    ///
    /// `buffer_size` is the mailbox capacity; a full mailbox makes handle
    /// calls wait, it never drops requests.
    pub fn new(gateway: G, buffer_size: usize) -> (Self, FormHandle<E>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = FormState::new();
        let handle = FormHandle::new(sender, state.clone());
        let vm = Self {
            receiver,
            gateway,
            state,
            items: Vec::new(),
            selected: None,
        };
        (vm, handle)
    }

    /// Runs the event loop until every handle is dropped.
    pub async fn run(mut self) {
        let entity = E::NOUN;
        info!(entity, "View-model started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::Load { scope, done } => {
                    debug!(entity, ?scope, "Load");
                    self.load(scope).await;
                    let _ = done.send(());
                }
                FormRequest::Create { scope, done } => {
                    debug!(entity, ?scope, "Create");
                    self.create(scope).await;
                    let _ = done.send(());
                }
                FormRequest::UpdateSelected { scope, done } => {
                    debug!(entity, ?scope, "Update");
                    self.update_selected(scope).await;
                    let _ = done.send(());
                }
                FormRequest::DeleteSelected { scope, done } => {
                    debug!(entity, ?scope, "Delete");
                    self.delete_selected(scope).await;
                    let _ = done.send(());
                }
                FormRequest::Select { index, done } => {
                    debug!(entity, ?index, "Select");
                    self.apply_selection(index);
                    let _ = done.send(());
                }
                FormRequest::SetField { name, value, done } => {
                    self.set_field(&name, value);
                    let _ = done.send(());
                }
            }
        }

        info!(entity, size = self.items.len(), "View-model shut down");
    }

    /// The selection transition. Always fires on selection change: selecting
    /// a row copies it into the form, overwriting any in-progress edits;
    /// clearing resets the form to schema defaults.
    fn apply_selection(&mut self, index: Option<usize>) {
        let entity = E::NOUN;
        match index {
            Some(i) if i < self.items.len() => {
                let item = self.items[i].clone();
                item.fill(&self.state.form);
                self.selected = Some(i);
                self.state.selected.set(Some(item));
                self.state.has_selection.set(true);
            }
            Some(i) => {
                warn!(entity, index = i, size = self.items.len(), "Selection out of range");
            }
            None => {
                self.selected = None;
                self.state.selected.set(None);
                self.state.has_selection.set(false);
                self.state.form.reset();
            }
        }
    }

    fn publish_items(&self) {
        self.state.items.set(self.items.clone());
    }

    async fn load(&mut self, scope: E::Scope) {
        let entity = E::NOUN;
        self.state.status.set(E::loading_status(&scope));
        match self.gateway.list(&scope).await {
            Ok(list) => {
                let count = list.len();
                self.items = list;
                self.publish_items();
                // Every row was just replaced; a live selection would point
                // at stale data, so it is dropped. An unselected form keeps
                // its in-progress draft.
                if self.selected.is_some() {
                    self.apply_selection(None);
                }
                info!(entity, count, "Loaded");
                self.state.status.set(E::loaded_status(count, &scope));
            }
            Err(e) => {
                warn!(entity, error = %e, "Load failed");
                self.state.status.set(format!("Load failed: {}", e));
            }
        }
    }

    async fn create(&mut self, scope: E::Scope) {
        let entity = E::NOUN;
        let draft = match E::draft(&self.state.form) {
            Ok(draft) => draft,
            Err(e) => {
                debug!(entity, reason = %e, "Create rejected locally");
                self.state.status.set(e.to_string());
                return;
            }
        };

        self.state.status.set(E::creating_status(&scope));
        match self.gateway.create(&scope, draft).await {
            Ok(created) => {
                let message = created.created_status(&scope);
                info!(entity, id = created.id(), "Created");
                self.items.insert(0, created);
                self.publish_items();
                self.apply_selection(Some(0));
                self.state.status.set(message);
            }
            Err(e) => {
                warn!(entity, error = %e, "Create failed");
                self.state.status.set(E::create_failed_status(&e));
            }
        }
    }

    async fn update_selected(&mut self, scope: E::Scope) {
        let entity = E::NOUN;
        let Some(index) = self.selected else {
            self.state.status.set(E::no_selection_status());
            return;
        };
        let draft = match E::draft(&self.state.form) {
            Ok(draft) => draft,
            Err(e) => {
                debug!(entity, reason = %e, "Update rejected locally");
                self.state.status.set(e.to_string());
                return;
            }
        };

        let id = self.items[index].id();
        self.state.status.set(E::updating_status());
        match self.gateway.update(&scope, id, draft).await {
            Ok(updated) => {
                let message = updated.updated_status();
                info!(entity, id, "Updated");
                self.items[index] = updated;
                self.publish_items();
                self.apply_selection(Some(index));
                self.state.status.set(message);
            }
            Err(e) => {
                warn!(entity, id, error = %e, "Update failed");
                self.state.status.set(format!("Update failed: {}", e));
            }
        }
    }

    async fn delete_selected(&mut self, scope: E::Scope) {
        let entity = E::NOUN;
        let Some(index) = self.selected else {
            self.state.status.set(E::no_selection_status());
            return;
        };

        let id = self.items[index].id();
        self.state.status.set(E::deleting_status());
        match self.gateway.delete(&scope, id).await {
            Ok(()) => {
                info!(entity, id, size = self.items.len() - 1, "Deleted");
                self.items.remove(index);
                self.publish_items();
                self.apply_selection(None);
                self.state.status.set(E::deleted_status(id));
            }
            Err(e) => {
                warn!(entity, id, error = %e, "Delete failed");
                self.state.status.set(E::delete_failed_status(&e));
            }
        }
    }

    fn set_field(&mut self, name: &str, value: String) {
        let entity = E::NOUN;
        if !self.state.form.set(name, value.clone()) {
            warn!(entity, field = name, "Unknown form field");
            return;
        }
        match E::check_field(name, &value) {
            FieldCheck::Skipped => {}
            FieldCheck::Valid => self.state.status.set(String::new()),
            FieldCheck::Invalid(message) => self.state.status.set(message),
        }
    }
}

// =============================================================================
// EXAMPLE USAGE (Test)
// =============================================================================
