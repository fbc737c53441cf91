//! # Desk Framework
//!
//! This crate provides the foundational building blocks for desktop-style
//! CRUD screens in Rust: an observable-state layer, a generic form
//! abstraction, and a single-writer **view-model actor** that keeps list
//! selection, form fields, validation status, and background network
//! operations consistent.
//!
//! ## Why a Generic View-Model?
//!
//! CRUD clients tend to grow one view-model class per entity, each a
//! near-copy of the last: hold the list, track the selection, copy the
//! selected row into the form, validate on edit, call the backend on submit,
//! patch the list from the response. This crate writes that synchronization
//! protocol **once**, in [`FormViewModel`], and parameterizes everything
//! that actually differs through the [`FormEntity`] trait:
//!
//! - the field schema and its defaults,
//! - the validation rule set (live per-field checks and submit-time drafts),
//! - the status vocabulary,
//! - the remote operations, via [`EntityGateway`].
//!
//! ## Concurrency Model
//!
//! - Each view-model runs in its own Tokio task and owns its state outright.
//! - Requests are processed **sequentially**; a gateway call is awaited
//!   inside the turn that issued it, so no two operations ever interleave
//!   on one screen's state. No locks anywhere.
//! - Multiple screens run in parallel; they share nothing.
//! - Callers observe progress through the [`Cell`]s in [`FormState`]; the
//!   status cell is the display-only error channel. The only typed error a
//!   handle returns is [`FrameworkError`], when the actor is gone.
//!
//! ## The Three Layers
//!
//! 1. **Entity Layer** ([`FormEntity`]): your domain records and rules.
//! 2. **Runtime Layer** ([`FormViewModel`]): message processing and state.
//! 3. **Interface Layer** ([`FormHandle`], [`FormClient`]): type-safe
//!    communication and screen wrappers.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockGateway`](mock::MockGateway), an
//! expectation-queue gateway double that records every call, including the
//! calls that *didn't* happen, which is how tests prove a validation
//! failure never reached the network.

pub mod actor;
pub mod cell;
pub mod client;
pub mod entity;
pub mod error;
pub mod form;
pub mod gateway;
pub mod handle;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::FormViewModel;
pub use cell::Cell;
pub use client::FormClient;
pub use entity::{FieldCheck, FormEntity};
pub use error::{FrameworkError, TransportError, ValidationError};
pub use form::{field, FieldSpec, Form};
pub use gateway::EntityGateway;
pub use handle::{FormHandle, FormState};
pub use message::{Ack, FormRequest};
