//! Anniversary rollover.
//!
//! Some registries publish only the registration date of a domain. Their
//! domains expire on a registration anniversary, renewed every term, so the
//! expiry is the first anniversary that lies strictly after the current
//! instant.

use crate::types::RenewalTerm;
use chrono::{DateTime, Utc};

/// Returns the first `reference + k * term` (k >= 1) strictly after `now`.
///
/// Every candidate is computed from `reference` with calendar month
/// arithmetic, so a February 29 reference lands on February 28 in common
/// years and on February 29 again in leap years, without drifting.
///
/// When `reference` is already after `now` the result is exactly one term
/// after `reference`. Returns `None` only if the result is outside the
/// representable date range.
#[must_use]
pub fn next_anniversary(
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
    term: RenewalTerm,
) -> Option<DateTime<Utc>> {
    let mut count = 1u32;
    loop {
        let candidate = reference.checked_add_months(term.repeated(count)?)?;
        if candidate > now {
            return Some(candidate);
        }
        count = count.checked_add(1)?;
    }
}
