//! Name filter for the visible subset.

use crate::types::CountryRecord;

/// True when `name` contains `query`, ignoring case. An empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    contains_lowered(name, &query.to_lowercase())
}

fn contains_lowered(name: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || name.to_lowercase().contains(query_lower)
}

/// Records whose common name contains `query` case-insensitively, in their
/// original order. Pure; cheap enough to run on every render.
pub fn filter_countries<'a>(
    records: &'a [CountryRecord],
    query: &str,
) -> Vec<&'a CountryRecord> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|r| contains_lowered(&r.common_name, &query_lower))
        .collect()
}
