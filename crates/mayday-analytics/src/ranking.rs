//! Disasters ranked by fatalities on the ground.

use std::cmp::Reverse;

use chrono::{NaiveDate, NaiveTime};
use mayday_domain::DisasterRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of the ground-fatality ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundFatalityEntry {
    pub location: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub ground_fatalities: u32,
}

impl From<&DisasterRecord> for GroundFatalityEntry {
    fn from(record: &DisasterRecord) -> Self {
        Self {
            location: record.location.clone(),
            date: record.date,
            time: record.time,
            ground_fatalities: record.ground_fatalities,
        }
    }
}

/// Disasters that killed people on the ground, most ground fatalities first.
///
/// Equal counts keep their input order. `limit` keeps only the first
/// `limit` entries; `None` returns the whole ranking.
#[must_use]
pub fn top_ground_fatalities(
    records: &[DisasterRecord],
    limit: Option<usize>,
) -> Vec<GroundFatalityEntry> {
    let mut ranking: Vec<GroundFatalityEntry> = records
        .iter()
        .filter(|r| r.ground_fatalities > 0)
        .map(GroundFatalityEntry::from)
        .collect();

    // stable
    ranking.sort_by_key(|e| Reverse(e.ground_fatalities));

    if let Some(limit) = limit {
        ranking.truncate(limit);
    }

    debug!(entries = ranking.len(), ?limit, "Ranked ground fatalities");
    ranking
}
