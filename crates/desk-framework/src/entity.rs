//! # FormEntity Trait
//!
//! The `FormEntity` trait is the contract a domain record (Client, Product,
//! Order, order line item) implements to be managed by the generic
//! [`FormViewModel`](crate::FormViewModel). It captures everything that
//! differs between the four screens (field schema, validation rule set,
//! draft payload, operation scope, status vocabulary) so the
//! synchronization protocol itself is written exactly once.
//!
//! # Architecture Note
//! The original shape of this system is four near-identical view-model
//! classes. Here the associated types play the role the copies played:
//! a `Client` form can only produce a `ClientDraft`, and the compiler rejects
//! any attempt to feed it to a product gateway. Writing the protocol once
//! against this trait removes the duplication tax without losing type
//! safety.
//!
//! # Provided Methods
//! The status-vocabulary methods all have derivable defaults built from
//! [`FormEntity::NOUN`] and [`FormEntity::PLURAL`] ("Created client ID 7",
//! "Loading products...", ...). Screens with non-standard phrasing override
//! just the methods that differ: the order line items speak of "adding" and
//! "removing" rather than creating and deleting.

use crate::error::ValidationError;
use crate::form::{FieldSpec, Form};
use std::fmt::Debug;

/// Outcome of a per-keystroke field check.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCheck {
    /// The field has no live validation; leave the status line alone.
    Skipped,
    /// The value is acceptable; clear the status line.
    Valid,
    /// The value is not acceptable; show the message. Advisory only: the
    /// edit itself is never blocked, only submission.
    Invalid(String),
}

/// Contract for an entity type managed by a [`FormViewModel`](crate::FormViewModel).
pub trait FormEntity: Clone + Send + Sync + 'static {
    /// The validated payload a submitted form turns into. One draft type
    /// serves both create and update; the id travels separately.
    type Draft: Clone + Send + Sync + Debug;

    /// Per-operation context. Top-level entities use `()`. A line-item
    /// screen is scoped to its owning order, so every operation carries the
    /// order id; the item's parent is fixed by that scope, never edited.
    type Scope: Clone + Send + Sync + Debug + 'static;

    /// Singular display noun ("client").
    const NOUN: &'static str;
    /// Plural display noun ("clients").
    const PLURAL: &'static str;

    /// The form schema: field names and default values, in display order.
    fn schema() -> &'static [FieldSpec];

    /// Backend-assigned id; `0` for a record that has not been created yet.
    fn id(&self) -> u32;

    /// Copies this record into the form (the selection transition).
    /// Absent optional fields render as empty strings.
    fn fill(&self, form: &Form);

    /// Live check for a single edited field. Only specific fields are
    /// watched; everything else returns [`FieldCheck::Skipped`].
    fn check_field(name: &str, value: &str) -> FieldCheck;

    /// Builds the submit payload from the form, or the *first* failing
    /// reason. Runs synchronously before any network call.
    fn draft(form: &Form) -> Result<Self::Draft, ValidationError>;

    // --- Status vocabulary (override where the screen phrases differ) ---

    fn loading_status(_scope: &Self::Scope) -> String {
        format!("Loading {}...", Self::PLURAL)
    }

    fn loaded_status(count: usize, _scope: &Self::Scope) -> String {
        format!("Loaded {} {}", count, Self::PLURAL)
    }

    fn creating_status(_scope: &Self::Scope) -> String {
        format!("Creating {}...", Self::NOUN)
    }

    fn created_status(&self, _scope: &Self::Scope) -> String {
        format!("Created {} ID {}", Self::NOUN, self.id())
    }

    fn updating_status() -> String {
        format!("Updating {}...", Self::NOUN)
    }

    fn updated_status(&self) -> String {
        format!("Updated {} ID {}", Self::NOUN, self.id())
    }

    fn deleting_status() -> String {
        format!("Deleting {}...", Self::NOUN)
    }

    fn deleted_status(id: u32) -> String {
        format!("Deleted {} ID {}", Self::NOUN, id)
    }

    fn no_selection_status() -> String {
        format!("No {} selected", Self::NOUN)
    }

    fn create_failed_status(error: &dyn std::fmt::Display) -> String {
        format!("Create failed: {}", error)
    }

    fn delete_failed_status(error: &dyn std::fmt::Display) -> String {
        format!("Delete failed: {}", error)
    }
}
