//! Listing filter inputs and their parsing rules.
//!
//! Each filter is independent: it either contributes one predicate or no
//! constraint at all. Invalid status values are silently ignored rather
//! than rejected, so an unrecognised `?status=` never empties a listing.

use crate::maintenance::{MaintenanceStatus, ACTIVE_STATUSES, INACTIVE_STATUSES};

/// Resolved form of the free-form `status` query input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    /// No constraint on status.
    Any,
    /// Status must be one of these values.
    OneOf(Vec<MaintenanceStatus>),
}

/// Parse the free-form status input into a [`StatusFilter`].
///
/// - `None`, empty, or `"all"` (case-insensitive) mean no constraint.
/// - `"active"` means OPEN or IN_PROGRESS; `"inactive"` means COMPLETED
///   or CANCELED.
/// - Anything else is tried as an exact status name (case-insensitive);
///   values that parse as no status yield no constraint.
pub fn parse_status_filter(input: Option<&str>) -> StatusFilter {
    let Some(input) = input else {
        return StatusFilter::Any;
    };
    if input.is_empty() || input.eq_ignore_ascii_case("all") {
        return StatusFilter::Any;
    }
    if input.eq_ignore_ascii_case("active") {
        return StatusFilter::OneOf(ACTIVE_STATUSES.to_vec());
    }
    if input.eq_ignore_ascii_case("inactive") {
        return StatusFilter::OneOf(INACTIVE_STATUSES.to_vec());
    }
    match MaintenanceStatus::parse(input) {
        Some(status) => StatusFilter::OneOf(vec![status]),
        None => StatusFilter::Any,
    }
}

/// Normalise the category input: empty means no constraint.
pub fn normalize_category(input: Option<&str>) -> Option<&str> {
    input.filter(|s| !s.is_empty())
}

/// Normalise the free-text search input: blank means no constraint.
pub fn normalize_search(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use MaintenanceStatus::*;

    #[test]
    fn all_null_and_empty_mean_no_constraint() {
        assert_eq!(parse_status_filter(None), StatusFilter::Any);
        assert_eq!(parse_status_filter(Some("")), StatusFilter::Any);
        assert_eq!(parse_status_filter(Some("all")), StatusFilter::Any);
        assert_eq!(parse_status_filter(Some("ALL")), StatusFilter::Any);
    }

    #[test]
    fn active_and_inactive_expand_to_status_sets() {
        assert_eq!(
            parse_status_filter(Some("active")),
            StatusFilter::OneOf(vec![Open, InProgress])
        );
        assert_eq!(
            parse_status_filter(Some("Inactive")),
            StatusFilter::OneOf(vec![Completed, Canceled])
        );
    }

    #[test]
    fn exact_status_names_match_case_insensitively() {
        assert_eq!(
            parse_status_filter(Some("in_progress")),
            StatusFilter::OneOf(vec![InProgress])
        );
        assert_eq!(
            parse_status_filter(Some("OPEN")),
            StatusFilter::OneOf(vec![Open])
        );
    }

    #[test]
    fn unrecognised_values_are_ignored() {
        assert_eq!(parse_status_filter(Some("bogus")), StatusFilter::Any);
    }

    #[test]
    fn category_and_search_blank_handling() {
        assert_eq!(normalize_category(None), None);
        assert_eq!(normalize_category(Some("")), None);
        assert_eq!(normalize_category(Some("electrical")), Some("electrical"));

        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some("  window ")), Some("window"));
    }
}
