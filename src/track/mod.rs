// src/track/mod.rs
//! Track points as they appear in a flight tracker's track log table.
//!
//! A [`TrackPoint`] holds the raw cell text of one table row, keyed by
//! [`Field`]. Nothing is parsed into numbers here; the only cleanup applied is
//! the per-column trimming done by the [`extract`] module while reading cells.

pub mod extract;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use extract::{extract, Extractor};

/// One column of the track log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Time,
    Lat,
    Lon,
    Course,
    Kts,
    Mph,
    Feet,
    Rate,
    ReportingFacility,
}

/// Column order of the track log table.
pub const TRACKLOG_COLUMNS: [Field; 9] = [
    Field::Time,
    Field::Lat,
    Field::Lon,
    Field::Course,
    Field::Kts,
    Field::Mph,
    Field::Feet,
    Field::Rate,
    Field::ReportingFacility,
];

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::Lat => "lat",
            Field::Lon => "lon",
            Field::Course => "course",
            Field::Kts => "kts",
            Field::Mph => "mph",
            Field::Feet => "feet",
            Field::Rate => "rate",
            Field::ReportingFacility => "reporting_facility",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TRACKLOG_COLUMNS
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::InvalidArg { flag: s!("field"), value: s!(s) })
    }
}

/// Raw field values of one track log row. Fields never seen stay absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackPoint {
    values: [Option<String>; 9],
}

impl TrackPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.slot()].as_deref()
    }

    /// Store `value`, replacing any earlier one.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.slot()] = Some(value.into());
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == TRACKLOG_COLUMNS.len()
    }

    /// Present fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        TRACKLOG_COLUMNS
            .iter()
            .filter_map(|f| self.get(*f).map(|v| (*f, v)))
    }
}
