//! Query engine over the loaded catalog.
//!
//! All operations borrow the loaded sequence and never mutate it. `list`
//! preserves catalog order; matching for `search` and `get` is
//! case-insensitive and order only matters for which of several partial
//! matches wins.

use crate::catalog::model::ComponentRecord;

/// Every record, in catalog order. An empty catalog is a valid answer,
/// distinct from a load failure.
pub fn list_all(records: &[ComponentRecord]) -> Vec<&ComponentRecord> {
    records.iter().collect()
}

/// Records whose name or description contains `keyword` case-insensitively,
/// in catalog order.
pub fn search<'a>(records: &'a [ComponentRecord], keyword: &str) -> Vec<&'a ComponentRecord> {
    let keyword = keyword.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&keyword)
                || record
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&keyword))
        })
        .collect()
}

/// Exact-then-partial name lookup.
///
/// Two literal passes, kept separate so the precedence rule stays auditable:
/// an exact case-insensitive match always wins over any partial match, even
/// one earlier in the catalog. The second pass falls back to the first
/// record whose name contains `query` as a case-insensitive substring.
pub fn get_by_name<'a>(records: &'a [ComponentRecord], query: &str) -> Option<&'a ComponentRecord> {
    let query = query.to_lowercase();

    for record in records {
        if record.name.to_lowercase() == query {
            return Some(record);
        }
    }

    for record in records {
        if record.name.to_lowercase().contains(&query) {
            return Some(record);
        }
    }

    None
}
