//! # Observable Cells
//!
//! This module defines [`Cell`], the reactive-state primitive the rest of the
//! framework is built on. A cell is a named, observable value: the view-model
//! actor writes it, and any number of UI widgets (or tests) subscribe to it
//! and re-render when it changes.
//!
//! # Architecture Note
//! Why not expose raw `watch` channels?
//! A `Cell` pairs the sender and the subscription surface behind one handle
//! that is cheap to clone and share. The *writer* discipline is enforced by
//! convention one level up: only the owning view-model actor calls [`Cell::set`]
//! on view-model state, so readers never observe a torn update.
//!
//! The two-way binding contract is preserved without tying the framework to
//! any particular UI toolkit: a widget edit flows in through the view-model
//! (which writes the cell), and the widget redraws from the subscription it
//! holds on the same cell.

use std::sync::Arc;
use tokio::sync::watch;

/// A shareable observable value.
///
/// Cloning a `Cell` clones the handle, not the value: all clones observe and
/// mutate the same underlying slot.
#[derive(Clone)]
pub struct Cell<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T: Clone + Send + Sync + 'static> Cell<T> {
    /// Creates a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies every subscriber.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Subscribes to changes. The receiver starts out seeing the current
    /// value and is marked changed on every subsequent [`Cell::set`].
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Cell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
