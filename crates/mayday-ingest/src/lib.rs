//! # Mayday Ingest
//!
//! Decodes the semicolon-delimited disaster table into
//! [`DisasterRecord`](mayday_domain::DisasterRecord) values.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{read_disasters, read_disasters_from_reader};
