//! Shared helpers: seeded stores with no latency and fixed dates.

use chrono::NaiveDate;
use tallybook_core::{Config, RecordId, Stores};

/// Stores seeded from demo data, mutations without delay.
pub fn stores() -> Stores {
    Stores::seeded(&Config::for_tests())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn id(s: &str) -> RecordId {
    RecordId::parse(s).expect("valid id")
}

/// The date the demo data is written around.
pub fn today() -> NaiveDate {
    day(2026, 10, 18)
}
