//! Multi-flight collisions grouped by decade.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use mayday_domain::DisasterRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalyticsError, Result};

/// Number of collisions recorded in one decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    /// First year of the decade, e.g. 1970.
    pub decade: i32,
    pub collisions: usize,
}

/// Collisions (disasters implicating two or more flights) per decade.
#[must_use]
pub fn collisions_per_decade(records: &[DisasterRecord]) -> BTreeMap<i32, usize> {
    let mut per_decade = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_collision()) {
        *per_decade.entry(record.decade()).or_insert(0) += 1;
    }
    per_decade
}

/// The decade with the most collisions. Equal counts resolve to the
/// earliest decade.
///
/// Fails with [`AnalyticsError::EmptyResult`] when no record implicates
/// two or more flights.
pub fn decade_with_most_collisions(records: &[DisasterRecord]) -> Result<DecadeCount> {
    let per_decade = collisions_per_decade(records);
    debug!(decades = per_decade.len(), "Grouped collisions by decade");

    per_decade
        .into_iter()
        .max_by_key(|&(decade, collisions)| (collisions, Reverse(decade)))
        .map(|(decade, collisions)| DecadeCount { decade, collisions })
        .ok_or(AnalyticsError::EmptyResult("no disaster implicates two or more flights"))
}
