//! # Mayday - Domain Model
//!
//! Value types describing historical aviation disasters and the flights
//! implicated in them. These types are shared by the ingestion layer, the
//! analytics engine and the command-line front end.
//!
//! Records are built once during ingestion and only borrowed afterwards.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Operational phase of a flight at the time of a disaster.
///
/// The source vocabulary is unconstrained ("Takeoff", "En route",
/// "Landing", ...), so this is an open tag rather than an enum. Comparison
/// is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationPhase(String);

impl OperationPhase {
    pub fn new(phase: impl Into<String>) -> Self {
        Self(phase.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OperationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OperationPhase {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OperationPhase {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for OperationPhase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One flight implicated in a disaster. Every field may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flight {
    pub operator: String,
    pub flight_code: String,
    pub route: String,
    pub aircraft_model: String,
}

impl Flight {
    pub fn new(
        operator: impl Into<String>,
        flight_code: impl Into<String>,
        route: impl Into<String>,
        aircraft_model: impl Into<String>,
    ) -> Self {
        Self {
            operator: operator.into(),
            flight_code: flight_code.into(),
            route: route.into(),
            aircraft_model: aircraft_model.into(),
        }
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// A single aviation disaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterRecord {
    // Temporal
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,

    pub location: String,

    // Casualties
    /// Airborne survivors.
    pub survivors: u32,
    /// Airborne fatalities.
    pub fatalities: u32,
    /// Fatalities among people not aboard any flight.
    pub ground_fatalities: u32,

    pub operation_phase: OperationPhase,
    pub flights: Vec<Flight>,
}

impl DisasterRecord {
    /// Persons aboard the implicated flights. Ground fatalities are not
    /// included.
    #[must_use]
    pub fn total_aboard(&self) -> u64 {
        u64::from(self.survivors) + u64::from(self.fatalities)
    }

    /// Share of the people aboard who died, or `None` when nobody was
    /// aboard.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fatality_rate(&self) -> Option<f64> {
        match self.total_aboard() {
            0 => None,
            total => Some(f64::from(self.fatalities) / total as f64),
        }
    }

    /// A collision implicates at least two flights.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        self.flights.len() >= 2
    }

    /// First year of the decade the disaster happened in, e.g. 1985 -> 1980.
    #[must_use]
    pub fn decade(&self) -> i32 {
        self.date.year().div_euclid(10) * 10
    }
}
