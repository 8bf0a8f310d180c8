// src/kml.rs
// KML output: one styled placemark holding a LineString through every point.
use std::fmt::{self, Write as _};
use std::io::Write;

use crate::config::consts::{ALTITUDE_MODE, KML_NAMESPACE, STYLE_ID};
use crate::config::RenderOptions;
use crate::core::sanitize::escape_xml;
use crate::error::{Error, Result};
use crate::track::{Field, TrackPoint};

/// Raw `(lon, lat, feet)` of every point, or the first missing field.
fn coordinates(points: &[TrackPoint]) -> Result<Vec<[&str; 3]>> {
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let get = |field| p.get(field).ok_or(Error::MissingField { index, field });
            Ok::<_, Error>([get(Field::Lon)?, get(Field::Lat)?, get(Field::Feet)?])
        })
        .collect()
}

/// Render the whole document. Fails before producing any text if a point
/// lacks a coordinate field.
pub fn render(points: &[TrackPoint], opts: &RenderOptions) -> Result<String> {
    let coords = coordinates(points)?;

    let mut doc = String::with_capacity(1024 + coords.len() * 32);
    write_head(&mut doc, opts)?;
    for [lon, lat, feet] in &coords {
        writeln!(doc, "{lon},{lat},{feet}")?;
    }
    write_tail(&mut doc)?;

    logd!("rendered KML with {} coordinates", coords.len());
    Ok(doc)
}

/// Render, then write the finished document to `w`.
pub fn write_kml<W: Write>(mut w: W, points: &[TrackPoint], opts: &RenderOptions) -> Result<()> {
    let doc = render(points, opts)?;
    w.write_all(doc.as_bytes())?;
    w.flush()?;
    Ok(())
}

fn flag(b: bool) -> u8 {
    u8::from(b)
}

fn write_head(w: &mut String, opts: &RenderOptions) -> fmt::Result {
    let name = escape_xml(&opts.name);
    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(w, r#"<kml xmlns="{KML_NAMESPACE}">"#)?;
    writeln!(w, "<Document>")?;
    writeln!(w, "<name>{name}</name>")?;
    writeln!(w, r#"<Style id="{STYLE_ID}">"#)?;
    writeln!(w, "<LineStyle>")?;
    writeln!(w, "<color>{}</color>", opts.line_color)?;
    writeln!(w, "<width>{}</width>", opts.width)?;
    writeln!(w, "</LineStyle>")?;
    writeln!(w, "<PolyStyle>")?;
    writeln!(w, "<color>{}</color>", opts.fill_color)?;
    writeln!(w, "</PolyStyle>")?;
    writeln!(w, "</Style>")?;
    writeln!(w, "<Placemark>")?;
    writeln!(w, "<name>{name}</name>")?;
    writeln!(w, "<styleUrl>#{STYLE_ID}</styleUrl>")?;
    writeln!(w, "<LineString>")?;
    writeln!(w, "<extrude>{}</extrude>", flag(opts.extrude))?;
    writeln!(w, "<tessellate>{}</tessellate>", flag(opts.tessellate))?;
    writeln!(w, "<altitudeMode>{ALTITUDE_MODE}</altitudeMode>")?;
    writeln!(w, "<coordinates>")
}

fn write_tail(w: &mut String) -> fmt::Result {
    writeln!(w, "</coordinates>")?;
    writeln!(w, "</LineString>")?;
    writeln!(w, "</Placemark>")?;
    writeln!(w, "</Document>")?;
    writeln!(w, "</kml>")
}
