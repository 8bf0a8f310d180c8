// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;
use crate::error::Error;
use crate::track::{Field, TRACKLOG_COLUMNS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub include_headers: bool,
    pub verbose: bool,
    pub render: RenderOptions,
}

impl AppOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::Kml,
            include_headers: false,
            verbose: false,
            render: RenderOptions::default(),
        }
    }
}

/* ---------------- Extraction ---------------- */

/// Where the track log lives in the page and how its columns map to fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    /// Token expected in the table's `id` attribute.
    pub table_id: &'static str,
    /// Exact `class` values of data rows (alternating banding).
    pub row_classes: &'static [&'static str],
    /// Token marking small-screen duplicates whose text must be skipped.
    pub hidden_span_class: &'static str,
    /// Column index → field.
    pub columns: &'static [Field],
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            table_id: TRACKLOG_TABLE_ID,
            row_classes: &DATA_ROW_CLASSES,
            hidden_span_class: HIDDEN_SPAN_CLASS,
            columns: &TRACKLOG_COLUMNS,
        }
    }
}

/* ---------------- Rendering ---------------- */

/// KML color, eight hex digits in aabbggrr order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == 8 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Color(s.to_ascii_lowercase()))
        } else {
            Err(Error::InvalidColor(s!(s)))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document and placemark label.
    pub name: String,
    pub line_color: Color,
    pub fill_color: Color,
    pub width: u32,
    /// Project the line down to the ground.
    pub extrude: bool,
    /// Follow terrain curvature.
    pub tessellate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            name: s!(DEFAULT_TRACK_NAME),
            line_color: Color(s!(DEFAULT_LINE_COLOR)),
            fill_color: Color(s!(DEFAULT_FILL_COLOR)),
            width: DEFAULT_LINE_WIDTH,
            extrude: true,
            tessellate: true,
        }
    }
}

/* ---------------- Output ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Kml,
    Csv,
    Tsv,
}

impl OutputFormat {
    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Kml => None,
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kml" => Ok(OutputFormat::Kml),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(Error::InvalidArg { flag: s!("--format"), value: s!(other) }),
        }
    }
}
