//! Casualty statistics grouped by operation phase.

use std::collections::BTreeMap;

use mayday_domain::{DisasterRecord, OperationPhase};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalyticsError, Result};

/// Per-phase event count and mean casualties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub events: usize,
    pub mean_survivors: f64,
    pub mean_fatalities: f64,
}

#[derive(Debug, Default)]
struct PhaseAccumulator {
    events: usize,
    survivors: u64,
    fatalities: u64,
}

impl PhaseAccumulator {
    fn add(&mut self, record: &DisasterRecord) {
        self.events += 1;
        self.survivors += u64::from(record.survivors);
        self.fatalities += u64::from(record.fatalities);
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self) -> PhaseStats {
        let events = self.events as f64;
        PhaseStats {
            events: self.events,
            mean_survivors: self.survivors as f64 / events,
            mean_fatalities: self.fatalities as f64 / events,
        }
    }
}

/// Event count, mean survivors and mean fatalities for every operation
/// phase.
///
/// With `fatality_rate_ceiling`, a disaster only counts when
/// `fatalities / (survivors + fatalities)` does not exceed the ceiling.
/// Phases left without any disaster are omitted.
///
/// Every record must have someone aboard: a record with zero survivors and
/// zero fatalities fails the whole call with
/// [`AnalyticsError::InvalidRecord`].
pub fn stats_by_operation_phase(
    records: &[DisasterRecord],
    fatality_rate_ceiling: Option<f64>,
) -> Result<BTreeMap<OperationPhase, PhaseStats>> {
    let mut buckets: BTreeMap<&OperationPhase, PhaseAccumulator> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let rate = record
            .fatality_rate()
            .ok_or_else(|| AnalyticsError::InvalidRecord {
                index,
                date: record.date,
                location: record.location.clone(),
                reason: "nobody aboard, fatality rate is undefined",
            })?;

        if fatality_rate_ceiling.is_none_or(|ceiling| rate <= ceiling) {
            buckets.entry(&record.operation_phase).or_default().add(record);
        }
    }

    debug!(phases = buckets.len(), ?fatality_rate_ceiling, "Grouped casualties by phase");

    Ok(buckets
        .into_iter()
        .map(|(phase, acc)| (phase.clone(), acc.finish()))
        .collect())
}
