//! # Mayday Analytics
//!
//! Aggregate statistics over historical aviation disasters. Every analysis
//! is a pure function of a borrowed record slice, so the same records can be
//! analysed repeatedly, in any order.
//!
//! ## Features
//!
//! - Disasters ranked by ground fatalities
//! - Decade with the most multi-flight collisions
//! - Longest period between disasters, optionally per operation phase
//! - Survivor and fatality means per operation phase
//! - JSON and Markdown reports bundling all of the above

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod collisions;
pub mod error;
pub mod intervals;
pub mod phases;
pub mod ranking;
pub mod reports;

#[cfg(test)]
mod testing;

pub use collisions::{DecadeCount, collisions_per_decade, decade_with_most_collisions};
pub use error::{AnalyticsError, Result};
pub use intervals::{DisasterFreePeriod, longest_gap_without_disaster, require_gap};
pub use phases::{PhaseStats, stats_by_operation_phase};
pub use ranking::{GroundFatalityEntry, top_ground_fatalities};
pub use reports::{AnalyticsReport, ReportOptions, generate_report};
