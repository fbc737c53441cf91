//! [`FormEntity`](desk_framework::FormEntity) implementations: schemas,
//! validation rule sets, and status vocabulary per entity.
//!
//! Shared parsing helpers live here so a field's live check and its
//! submit-time validation speak with one voice.

pub mod client;
pub mod order;
pub mod order_item;
pub mod product;

use desk_framework::{FieldCheck, ValidationError};

/// Parses a required non-negative number ("Price", "Unit price").
pub(crate) fn require_number(label: &str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError(format!("{} is required", label)));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError(format!("{} must be numeric", label)))?;
    if value < 0.0 {
        return Err(ValidationError(format!("{} must be >= 0", label)));
    }
    Ok(value)
}

/// Parses a required non-negative integer ("Stock", "Quantity").
pub(crate) fn require_count(label: &str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError(format!("{} is required", label)));
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| ValidationError(format!("{} must be an integer", label)))?;
    if value < 0 {
        return Err(ValidationError(format!("{} must be >= 0", label)));
    }
    u32::try_from(value).map_err(|_| ValidationError(format!("{} must be an integer", label)))
}

/// Parses an optional non-negative integer ("Provider ID"); blank means
/// absent, not zero.
pub(crate) fn optional_count(label: &str, raw: &str) -> Result<Option<u32>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    require_count(label, raw).map(Some)
}

/// Live-check adapter: required non-negative number.
pub(crate) fn check_number(label: &str, raw: &str) -> FieldCheck {
    match require_number(label, raw) {
        Ok(_) => FieldCheck::Valid,
        Err(e) => FieldCheck::Invalid(e.to_string()),
    }
}

/// Live-check adapter: required non-negative integer.
pub(crate) fn check_count(label: &str, raw: &str) -> FieldCheck {
    match require_count(label, raw) {
        Ok(_) => FieldCheck::Valid,
        Err(e) => FieldCheck::Invalid(e.to_string()),
    }
}

/// Live-check adapter: optional non-negative integer (blank is fine).
pub(crate) fn check_optional_count(label: &str, raw: &str) -> FieldCheck {
    match optional_count(label, raw) {
        Ok(_) => FieldCheck::Valid,
        Err(e) => FieldCheck::Invalid(e.to_string()),
    }
}

/// Trims a text field, mapping blank to `None` for optional wire fields.
pub(crate) fn blank_to_none(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
