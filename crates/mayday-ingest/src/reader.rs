//! Decoder for the semicolon-delimited disaster table.
//!
//! Column layout (header row is skipped):
//!
//! ```text
//! 0 Date | 1 Time | 2 Location | 3 Operator | 4 Flight | 5 Route | 6 Type
//! 7 Survivors | 8 Fatalities | 9 Ground | 10 Operation
//! ```
//!
//! Columns 3 to 6 may carry several flights separated by `/`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;
use mayday_domain::{DisasterRecord, Flight, OperationPhase};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";
const FLIGHT_SEPARATOR: char = '/';

const COL_DATE: usize = 0;
const COL_TIME: usize = 1;
const COL_LOCATION: usize = 2;
const COL_OPERATOR: usize = 3;
const COL_FLIGHT: usize = 4;
const COL_ROUTE: usize = 5;
const COL_TYPE: usize = 6;
const COL_SURVIVORS: usize = 7;
const COL_FATALITIES: usize = 8;
const COL_GROUND: usize = 9;
const COL_OPERATION: usize = 10;

const COLUMN_NAMES: [&str; 11] = [
    "Date",
    "Time",
    "Location",
    "Operator",
    "Flight",
    "Route",
    "Type",
    "Survivors",
    "Fatalities",
    "Ground",
    "Operation",
];

/// Read every disaster in the table at `path`.
pub fn read_disasters<P: AsRef<Path>>(path: P) -> Result<Vec<DisasterRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_disasters_from_reader(file)?;
    info!(path = %path.display(), records = records.len(), "Loaded disaster table");
    Ok(records)
}

/// Read every disaster from any byte source holding the table.
pub fn read_disasters_from_reader<R: Read>(reader: R) -> Result<Vec<DisasterRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        records.push(parse_row(idx + 1, &row)?);
    }

    debug!(records = records.len(), "Decoded disaster rows");
    Ok(records)
}

fn parse_row(row: usize, fields: &StringRecord) -> Result<DisasterRecord> {
    let field = |col: usize| {
        fields.get(col).ok_or(IngestError::MissingColumn {
            row,
            column: COLUMN_NAMES[col],
        })
    };

    Ok(DisasterRecord {
        date: parse_date(row, field(COL_DATE)?)?,
        time: parse_time(row, field(COL_TIME)?)?,
        location: field(COL_LOCATION)?.trim().to_string(),
        survivors: parse_count(row, COLUMN_NAMES[COL_SURVIVORS], field(COL_SURVIVORS)?)?,
        fatalities: parse_count(row, COLUMN_NAMES[COL_FATALITIES], field(COL_FATALITIES)?)?,
        ground_fatalities: parse_count(row, COLUMN_NAMES[COL_GROUND], field(COL_GROUND)?)?,
        operation_phase: OperationPhase::new(field(COL_OPERATION)?.trim()),
        flights: parse_flights(
            field(COL_OPERATOR)?,
            field(COL_FLIGHT)?,
            field(COL_ROUTE)?,
            field(COL_TYPE)?,
        ),
    })
}

/// Parse a `dd/mm/YYYY` date.
pub fn parse_date(row: usize, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| IngestError::InvalidDate {
        row,
        value: value.to_string(),
    })
}

/// Parse an `HH:MM` time; an empty cell means the time is unknown.
pub fn parse_time(row: usize, value: &str) -> Result<Option<NaiveTime>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map(Some)
        .map_err(|_| IngestError::InvalidTime {
            row,
            value: value.to_string(),
        })
}

/// Parse a casualty count; an empty cell counts as zero.
pub fn parse_count(row: usize, column: &'static str, value: &str) -> Result<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| IngestError::InvalidCount {
        row,
        column,
        value: value.to_string(),
    })
}

/// Build the flights of one row from its `/`-separated columns.
///
/// The i-th flight takes the i-th value of every column. Columns with
/// fewer values cap the number of flights.
#[must_use]
pub fn parse_flights(operators: &str, codes: &str, routes: &str, models: &str) -> Vec<Flight> {
    fn split(s: &str) -> Vec<&str> {
        s.split(FLIGHT_SEPARATOR).map(str::trim).collect()
    }

    let operators = split(operators);
    let codes = split(codes);
    let routes = split(routes);
    let models = split(models);

    operators
        .into_iter()
        .zip(codes)
        .zip(routes)
        .zip(models)
        .map(|(((operator, code), route), model)| Flight::new(operator, code, route, model))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "Date;Time;Location;Operator;Flight;Route;Type;Survivors;Fatalities;Ground;Operation\n";

    fn table(rows: &[&str]) -> String {
        let mut s = HEADER.to_string();
        for row in rows {
            s.push_str(row);
            s.push('\n');
        }
        s
    }

    #[test]
    fn test_read_single_row() {
        let data = table(&[
            "27/03/1977;17:07; Tenerife, Canary Islands ;KLM / Pan American World Airways;4805 / 1736;Tenerife - Las Palmas / Tenerife - Las Palmas;Boeing B-747 / Boeing B-747;61;583;0;Takeoff",
        ]);
        let records = read_disasters_from_reader(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.date, NaiveDate::from_ymd_opt(1977, 3, 27).unwrap());
        assert_eq!(r.time, NaiveTime::from_hms_opt(17, 7, 0));
        assert_eq!(r.location, "Tenerife, Canary Islands");
        assert_eq!(r.survivors, 61);
        assert_eq!(r.fatalities, 583);
        assert_eq!(r.ground_fatalities, 0);
        assert_eq!(r.operation_phase.as_str(), "Takeoff");
        assert_eq!(r.flights.len(), 2);
        assert_eq!(r.flights[0].operator, "KLM");
        assert_eq!(r.flights[1].flight_code, "1736");
        assert!(r.is_collision());
    }

    #[test]
    fn test_empty_cells() {
        let data = table(&["02/01/1950;;Somewhere;;;;;;3;;"]);
        let records = read_disasters_from_reader(data.as_bytes()).unwrap();
        let r = &records[0];
        assert_eq!(r.time, None);
        assert_eq!(r.survivors, 0);
        assert_eq!(r.fatalities, 3);
        assert_eq!(r.ground_fatalities, 0);
        assert!(r.operation_phase.is_empty());
        assert_eq!(r.flights, vec![Flight::default()]);
    }

    #[test]
    fn test_header_only() {
        let records = read_disasters_from_reader(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_date_reports_row() {
        let data = table(&[
            "01/01/2000;;A;;;;;1;1;0;Landing",
            "2000-01-02;;B;;;;;1;1;0;Landing",
        ]);
        let err = read_disasters_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::InvalidDate { row: 2, .. }));
    }

    #[test]
    fn test_invalid_time() {
        let data = table(&["01/01/2000;noon;A;;;;;1;1;0;Landing"]);
        let err = read_disasters_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::InvalidTime { row: 1, .. }));
    }

    #[test]
    fn test_negative_count_rejected() {
        let data = table(&["01/01/2000;;A;;;;;-1;1;0;Landing"]);
        let err = read_disasters_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidCount {
                column: "Survivors",
                ..
            }
        ));
    }

    #[test]
    fn test_short_row() {
        let data = table(&["01/01/2000;;A;;;;;1;1"]);
        let err = read_disasters_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                row: 1,
                column: "Ground"
            }
        ));
    }

    #[test]
    fn test_flights_truncate_to_shortest_column() {
        let flights = parse_flights("A / B / C", "1/2", "R1/R2/R3", "M1/M2/M3");
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[1], Flight::new("B", "2", "R2", "M2"));

        let single = parse_flights("KLM", "4805", "Tenerife - Las Palmas", "Boeing B-747");
        assert_eq!(
            single,
            vec![Flight::new("KLM", "4805", "Tenerife - Las Palmas", "Boeing B-747")]
        );
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let data = table(&[
            "12/08/1985;18:56;Mount Osutaka, Japan;Japan Air Lines;123;Tokyo - Osaka;Boeing B-747;4;520;0;En route",
        ]);
        file.write_all(data.as_bytes()).unwrap();

        let records = read_disasters(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].flights.len(), 1);
    }

    #[test]
    fn test_bundled_sample_table() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/disasters.csv");
        let records = read_disasters(path).unwrap();
        assert_eq!(records.len(), 9);
        assert!(records.iter().all(|r| r.total_aboard() > 0));
        assert_eq!(records.iter().filter(|r| r.is_collision()).count(), 4);
        assert_eq!(records[7].time, None);
    }

    #[test]
    fn test_missing_file() {
        let err = read_disasters("/nonexistent/disasters.csv").unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
