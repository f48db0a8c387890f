//! Staleness policy for the local checkout.
//!
//! A checkout is due for refresh when more than [`STALENESS_WINDOW`] has
//! elapsed since its last fetch, or when no fetch timestamp can be found at
//! all. The policy is strictly greater-than: a checkout exactly seven days
//! old is still fresh. Evaluation is pure; callers supply the timestamp and
//! the controller in [`crate::sync`] decides what to do with the verdict.

use std::time::{Duration, SystemTime};

/// Refresh window: checkouts older than seven days are stale.
pub const STALENESS_WINDOW: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Whether a checkout last synced at `last_sync` is due for refresh now.
///
/// An absent timestamp (no fetch marker on disk) is stale by definition, not
/// an error.
pub fn is_stale(last_sync: Option<SystemTime>) -> bool {
    is_stale_at(last_sync, SystemTime::now(), STALENESS_WINDOW)
}

/// Core of the policy with explicit `now` and `window`, so boundaries can be
/// pinned down in tests.
///
/// A `last_sync` in the future (clock skew, restored backups) counts as
/// fresh rather than failing.
pub fn is_stale_at(last_sync: Option<SystemTime>, now: SystemTime, window: Duration) -> bool {
    let Some(last_sync) = last_sync else {
        return true;
    };
    match now.duration_since(last_sync) {
        Ok(elapsed) => elapsed > window,
        Err(_) => false,
    }
}
