//! # Forms
//!
//! A [`Form`] is the editable half of a screen: an ordered set of named
//! string-valued [`Cell`]s built from a static schema. Every field holds its
//! value as entered text; parsing and validation are the entity's concern
//! (see [`FormEntity`](crate::FormEntity)), which keeps the form itself
//! entirely table-driven and identical across entity types.
//!
//! Defaults come from the schema, so "clear the form" means "reset every
//! field to its schema default", which is not necessarily empty (an order
//! form defaults its status to `pending`, for example).

use crate::cell::Cell;

/// One entry in a form schema: the field name and its default value.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: &'static str,
}

/// Shorthand constructor so schemas read as tables.
pub const fn field(name: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec { name, default }
}

/// A named set of observable text fields.
///
/// Cloning a `Form` clones the handles; all clones share the same cells.
#[derive(Clone)]
pub struct Form {
    schema: &'static [FieldSpec],
    fields: Vec<(&'static str, Cell<String>)>,
}

impl Form {
    /// Builds a form with one cell per schema entry, initialized to defaults.
    pub fn new(schema: &'static [FieldSpec]) -> Self {
        let fields = schema
            .iter()
            .map(|spec| (spec.name, Cell::new(spec.default.to_string())))
            .collect();
        Self { schema, fields }
    }

    /// The cell backing `name`, if the schema defines it.
    pub fn cell(&self, name: &str) -> Option<&Cell<String>> {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, cell)| cell)
    }

    /// Current value of `name`; empty string for unknown fields.
    pub fn value(&self, name: &str) -> String {
        self.cell(name).map(Cell::get).unwrap_or_default()
    }

    /// Sets `name` to `value`. Returns `false` if the schema has no such
    /// field (the caller decides whether that is worth a log line).
    pub fn set(&self, name: &str, value: impl Into<String>) -> bool {
        match self.cell(name) {
            Some(cell) => {
                cell.set(value.into());
                true
            }
            None => false,
        }
    }

    /// Resets every field to its schema default.
    pub fn reset(&self) {
        for spec in self.schema {
            if let Some(cell) = self.cell(spec.name) {
                cell.set(spec.default.to_string());
            }
        }
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMA: [FieldSpec; 3] = [
        field("name", ""),
        field("status", "pending"),
        field("quantity", "1"),
    ];

    #[test]
    fn test_defaults_and_reset() {
        let form = Form::new(&SCHEMA);
        assert_eq!(form.value("status"), "pending");
        assert_eq!(form.value("quantity"), "1");

        assert!(form.set("name", "Ann"));
        assert!(form.set("status", "shipped"));
        assert_eq!(form.value("name"), "Ann");

        form.reset();
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("status"), "pending");
        assert_eq!(form.value("quantity"), "1");
    }

    #[test]
    fn test_unknown_field() {
        let form = Form::new(&SCHEMA);
        assert!(!form.set("nope", "x"));
        assert_eq!(form.value("nope"), "");
        assert!(form.cell("nope").is_none());
    }
}
