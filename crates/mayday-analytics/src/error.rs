//! Analytics error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Analytics errors.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// An aggregation that needs at least one qualifying record got none
    #[error("No qualifying records: {0}")]
    EmptyResult(&'static str),

    /// A record breaks an arithmetic precondition of a statistic
    #[error("Invalid record #{index} ({date}, {location}): {reason}")]
    InvalidRecord {
        index: usize,
        date: NaiveDate,
        location: String,
        reason: &'static str,
    },

    /// Fewer than two dated records to measure an interval between
    #[error("No data found for query")]
    NoData,

    /// Data conversion error
    #[error("Data conversion error: {0}")]
    Conversion(String),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
