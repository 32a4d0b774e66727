//! Report generation for analytics data.

use std::collections::BTreeMap;

use mayday_domain::{DisasterRecord, OperationPhase};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collisions::{DecadeCount, decade_with_most_collisions};
use crate::error::{AnalyticsError, Result};
use crate::intervals::{DisasterFreePeriod, longest_gap_without_disaster};
use crate::phases::{PhaseStats, stats_by_operation_phase};
use crate::ranking::{GroundFatalityEntry, top_ground_fatalities};

/// Knobs forwarded to the individual analyses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Length of the ground-fatality ranking; `None` keeps every entry.
    pub ranking_limit: Option<usize>,
    /// Restricts the disaster-free period search to one phase.
    pub phase: Option<OperationPhase>,
    /// Highest fatality rate a disaster may have to enter the phase stats.
    pub fatality_rate_ceiling: Option<f64>,
}

/// Comprehensive analytics report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub generated_at: String,
    pub record_count: usize,
    pub options: ReportOptions,
    pub ground_fatalities: Vec<GroundFatalityEntry>,
    /// `None` when the dataset has no multi-flight collision.
    pub busiest_collision_decade: Option<DecadeCount>,
    pub longest_gap: Option<DisasterFreePeriod>,
    pub phase_stats: BTreeMap<OperationPhase, PhaseStats>,
}

/// Run every analysis over `records`.
///
/// A dataset without collisions yields an empty decade entry; any other
/// analytics error aborts the report.
pub fn generate_report(
    records: &[DisasterRecord],
    options: &ReportOptions,
) -> Result<AnalyticsReport> {
    let ground_fatalities = top_ground_fatalities(records, options.ranking_limit);

    let busiest_collision_decade = match decade_with_most_collisions(records) {
        Ok(decade) => Some(decade),
        Err(AnalyticsError::EmptyResult(_)) => None,
        Err(e) => return Err(e),
    };

    let longest_gap = longest_gap_without_disaster(records, options.phase.as_ref());
    let phase_stats = stats_by_operation_phase(records, options.fatality_rate_ceiling)?;

    info!(
        records = records.len(),
        ranked = ground_fatalities.len(),
        phases = phase_stats.len(),
        "Generated analytics report"
    );

    Ok(AnalyticsReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        record_count: records.len(),
        options: options.clone(),
        ground_fatalities,
        busiest_collision_decade,
        longest_gap,
        phase_stats,
    })
}

impl AnalyticsReport {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AnalyticsError::Conversion(e.to_string()))
    }

    /// Render as a Markdown document.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Aviation Disaster Report\n\n");
        md.push_str(&format!("**Generated:** {}\n\n", self.generated_at));
        md.push_str(&format!("**Records analysed:** {}\n\n", self.record_count));

        md.push_str("## Ground Fatalities\n\n");
        if self.ground_fatalities.is_empty() {
            md.push_str("No disaster caused fatalities on the ground.\n\n");
        } else {
            md.push_str("| Rank | Location | Date | Time | Ground Fatalities |\n");
            md.push_str("|------|----------|------|------|-------------------|\n");
            for (i, entry) in self.ground_fatalities.iter().enumerate() {
                let time = entry
                    .time
                    .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string());
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    i + 1,
                    entry.location,
                    entry.date,
                    time,
                    entry.ground_fatalities
                ));
            }
            md.push('\n');
        }

        md.push_str("## Collisions\n\n");
        match self.busiest_collision_decade {
            Some(decade) => md.push_str(&format!(
                "The {}s saw the most multi-flight collisions ({}).\n\n",
                decade.decade, decade.collisions
            )),
            None => md.push_str("No multi-flight collisions recorded.\n\n"),
        }

        md.push_str("## Longest Period Without Disasters\n\n");
        if let Some(ref phase) = self.options.phase {
            md.push_str(&format!("*Operation phase:* {phase}\n\n"));
        }
        match self.longest_gap {
            Some(gap) => md.push_str(&format!(
                "{} days, from {} to {}.\n\n",
                gap.days, gap.start, gap.end
            )),
            None => md.push_str("Not enough disasters to measure an interval.\n\n"),
        }

        md.push_str("## Operation Phases\n\n");
        if let Some(ceiling) = self.options.fatality_rate_ceiling {
            md.push_str(&format!("*Fatality rate ceiling:* {ceiling:.2}\n\n"));
        }
        if self.phase_stats.is_empty() {
            md.push_str("No disaster matched.\n\n");
        } else {
            md.push_str("| Phase | Events | Mean Survivors | Mean Fatalities |\n");
            md.push_str("|-------|--------|----------------|-----------------|\n");
            for (phase, stats) in &self.phase_stats {
                let phase = if phase.is_empty() { "(unknown)" } else { phase.as_str() };
                md.push_str(&format!(
                    "| {} | {} | {:.2} | {:.2} |\n",
                    phase, stats.events, stats.mean_survivors, stats.mean_fatalities
                ));
            }
            md.push('\n');
        }

        md
    }
}
