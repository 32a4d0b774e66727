//! Longest stretch of time between consecutive disasters.

use chrono::NaiveDate;
use mayday_domain::{DisasterRecord, OperationPhase};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalyticsError, Result};

/// Two consecutive disaster dates and the number of days between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasterFreePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
}

/// Longest gap between two consecutive disasters, optionally only counting
/// disasters in `phase` (exact match).
///
/// Returns `None` when there is no interval to report: fewer than two
/// qualifying disasters, or all of them on the same day. When several gaps
/// share the maximum length the earliest one is returned.
#[must_use]
pub fn longest_gap_without_disaster(
    records: &[DisasterRecord],
    phase: Option<&OperationPhase>,
) -> Option<DisasterFreePeriod> {
    let mut dates: Vec<NaiveDate> = records
        .iter()
        .filter(|r| phase.is_none_or(|p| r.operation_phase == *p))
        .map(|r| r.date)
        .collect();
    dates.sort();

    let mut longest: Option<DisasterFreePeriod> = None;
    for pair in dates.windows(2) {
        let days = (pair[1] - pair[0]).num_days();
        if days > longest.map_or(0, |p| p.days) {
            longest = Some(DisasterFreePeriod {
                start: pair[0],
                end: pair[1],
                days,
            });
        }
    }

    debug!(dates = dates.len(), ?phase, ?longest, "Scanned disaster-free periods");
    longest
}

/// Like [`longest_gap_without_disaster`], but treats "no interval" as
/// [`AnalyticsError::NoData`].
pub fn require_gap(
    records: &[DisasterRecord],
    phase: Option<&OperationPhase>,
) -> Result<DisasterFreePeriod> {
    longest_gap_without_disaster(records, phase).ok_or(AnalyticsError::NoData)
}
