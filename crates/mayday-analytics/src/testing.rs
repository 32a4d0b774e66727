//! Record builders shared by the unit tests.

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::CityName;
use mayday_domain::{DisasterRecord, Flight, OperationPhase};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A single-flight record with one survivor and one fatality.
pub fn disaster(on: NaiveDate) -> DisasterRecord {
    DisasterRecord {
        date: on,
        time: None,
        location: CityName().fake(),
        survivors: 1,
        fatalities: 1,
        ground_fatalities: 0,
        operation_phase: OperationPhase::from("En route"),
        flights: vec![Flight::new("Operator", "101", "A - B", "Douglas DC-3")],
    }
}

pub fn with_ground(location: &str, ground_fatalities: u32) -> DisasterRecord {
    DisasterRecord {
        location: location.to_string(),
        ground_fatalities,
        ..disaster(date(1990, 6, 1))
    }
}

pub fn with_flights(on: NaiveDate, flights: usize) -> DisasterRecord {
    DisasterRecord {
        flights: vec![Flight::default(); flights],
        ..disaster(on)
    }
}

pub fn with_phase(on: NaiveDate, phase: &str) -> DisasterRecord {
    DisasterRecord {
        operation_phase: OperationPhase::from(phase),
        ..disaster(on)
    }
}

pub fn with_casualties(phase: &str, survivors: u32, fatalities: u32) -> DisasterRecord {
    DisasterRecord {
        survivors,
        fatalities,
        ..with_phase(date(2001, 1, 1), phase)
    }
}

/// Random records with arbitrary locations, casualties and dates.
pub fn random_records(count: usize) -> Vec<DisasterRecord> {
    (0..count)
        .map(|_| {
            let on = date(
                (1920_i32..2020).fake::<i32>(),
                (1_u32..13).fake::<u32>(),
                (1_u32..29).fake::<u32>(),
            );
            DisasterRecord {
                survivors: (0_u32..50).fake::<u32>(),
                fatalities: (1_u32..300).fake::<u32>(),
                ground_fatalities: (0_u32..4).fake::<u32>(),
                flights: vec![Flight::default(); (0_usize..3).fake::<usize>()],
                ..disaster(on)
            }
        })
        .collect()
}
