//! Partial-update field rules shared by the update handlers.
//!
//! Each scalar field of an update payload is applied independently with a
//! per-field skip condition. Name-like fields treat blank strings as "no
//! change"; free-text fields apply any non-null value, blank included.
//! The two behaviours look inconsistent but both are intentional and
//! covered by tests.

use crate::types::Timestamp;

/// Patch a name-like field: apply only if present and non-blank.
pub fn patch_name(current: &mut String, requested: Option<String>) {
    if let Some(value) = requested {
        if !value.trim().is_empty() {
            *current = value;
        }
    }
}

/// Patch a free-text field: apply any present value, blank included.
pub fn patch_text(current: &mut String, requested: Option<String>) {
    if let Some(value) = requested {
        *current = value;
    }
}

/// Patch an enum-valued or date field: apply if present.
pub fn patch_value<T>(current: &mut T, requested: Option<T>) {
    if let Some(value) = requested {
        *current = value;
    }
}

/// Patch an action's completion date with the non-regression guard.
///
/// The new value is applied only if it is not before `start_date`; an
/// out-of-order value is silently dropped and the old value retained.
/// `start_date` is the action's date *before* this update, even when the
/// same payload also changes the start date.
pub fn patch_completion_date(
    current: &mut Timestamp,
    requested: Option<Timestamp>,
    start_date: Timestamp,
) {
    if let Some(value) = requested {
        if value >= start_date {
            *current = value;
        }
    }
}
