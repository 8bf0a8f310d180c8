// src/csv.rs
// Plain table dump of extracted points (CSV/TSV), for inspecting a page
// before turning it into KML.
use std::io::{self, Write};

use crate::track::{TrackPoint, TRACKLOG_COLUMNS};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One row per point, fields in column order; absent fields are empty cells.
pub fn write_points<W: Write>(
    mut w: W,
    points: &[TrackPoint],
    sep: char,
    include_headers: bool,
) -> io::Result<()> {
    if include_headers {
        let names: Vec<&str> = TRACKLOG_COLUMNS.iter().map(|f| f.as_str()).collect();
        write_row(&mut w, &names, sep)?;
    }
    for p in points {
        let row: Vec<&str> = TRACKLOG_COLUMNS
            .iter()
            .map(|f| p.get(*f).unwrap_or(""))
            .collect();
        write_row(&mut w, &row, sep)?;
    }
    w.flush()
}
