// src/track/extract.rs
// Pull track points out of the track log table of a saved flight page.
//
// Assumptions (page layout):
// - the table carries id="tracklogTable"
// - data rows have class="smallrow1" or class="smallrow2" (banding)
// - cells follow the fixed column order in `TableLayout::columns`
// - <span class="hide-for-medium-up"> holds small-screen duplicates to skip

use crate::config::TableLayout;
use crate::core::html::Tag;
use crate::core::sanitize::{drop_chars, keep_numeric};
use crate::core::scanner::{Event, Scanner};

use super::{Field, TrackPoint};

/// Extract every track point from `doc` using the default layout.
pub fn extract(doc: &str) -> Vec<TrackPoint> {
    Extractor::default().extract(doc)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Extractor {
    layout: TableLayout,
}

impl Extractor {
    pub fn new(layout: TableLayout) -> Self {
        Self { layout }
    }

    /// Single pass over the document; rows come back in document order.
    pub fn extract(&self, doc: &str) -> Vec<TrackPoint> {
        let mut state = State::default();
        for ev in Scanner::new(doc) {
            state.step(&self.layout, ev);
        }
        if state.row.is_some() {
            logd!("document ended inside a data row; row dropped");
        }
        logf!("extracted {} track points", state.points.len());
        state.points
    }
}

/// Transient parser state; lives for one `extract` call.
#[derive(Default)]
struct State {
    in_table: bool,
    /// Active data row, if any.
    row: Option<TrackPoint>,
    in_cell: bool,
    /// Open spans inside (and including) the suppressing span; 0 = not suppressed.
    /// Only the matching close ends suppression, not the first `</span>` seen.
    hidden_depth: usize,
    /// None until the first cell of the row.
    column: Option<usize>,
    points: Vec<TrackPoint>,
}

impl State {
    fn step(&mut self, layout: &TableLayout, ev: Event<'_>) {
        match ev {
            Event::Start(tag) => self.open(layout, &tag),
            Event::End { name } => self.close(&name),
            Event::Text(text) => self.text(layout, &text),
        }
    }

    fn open(&mut self, layout: &TableLayout, tag: &Tag) {
        match tag.name.as_str() {
            "table" => {
                if tag.has_token("id", layout.table_id) {
                    logd!("entering track log table");
                    self.in_table = true;
                }
            }
            "tr" if self.in_table => {
                let is_data = tag
                    .attr("class")
                    .is_some_and(|c| layout.row_classes.contains(&c));
                if is_data {
                    self.row = Some(TrackPoint::new());
                    self.column = None;
                }
            }
            "td" if self.row.is_some() => {
                self.column = Some(self.column.map_or(0, |c| c + 1));
                self.in_cell = true;
            }
            "span" => {
                if self.hidden_depth > 0 {
                    self.hidden_depth += 1;
                } else if tag.has_token("class", layout.hidden_span_class) {
                    self.hidden_depth = 1;
                }
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            // no nesting depth: any table close ends the table
            "table" => self.in_table = false,
            "tr" => {
                if let Some(point) = self.row.take() {
                    self.in_cell = false;
                    self.points.push(point);
                }
            }
            "td" => self.in_cell = false,
            "span" => self.hidden_depth = self.hidden_depth.saturating_sub(1),
            _ => {}
        }
    }

    fn text(&mut self, layout: &TableLayout, text: &str) {
        if !self.in_cell || self.hidden_depth > 0 {
            return;
        }
        let (Some(point), Some(col)) = (self.row.as_mut(), self.column) else {
            return;
        };
        let Some(&field) = layout.columns.get(col) else {
            logd!("ignoring text in extra column {}: {:?}", col, text);
            return;
        };
        // last write wins within a cell
        point.set(field, clean_cell(field, text));
    }
}

/// Per-column cleanup of raw cell text.
pub fn clean_cell(field: Field, text: &str) -> String {
    match field {
        // arrow glyph + space in front, degree sign behind
        Field::Course => drop_chars(text, 2, 1),
        // unit suffix
        Field::Rate => drop_chars(text, 0, 1),
        Field::ReportingFacility => s!(text.trim()),
        Field::Feet => keep_numeric(text),
        _ => s!(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(class: &str, cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        format!("<tr class=\"{class}\">{tds}</tr>")
    }

    fn table(rows: &[String]) -> String {
        format!("<table id=\"tracklogTable\">{}</table>", rows.concat())
    }

    const CELLS: [&str; 9] = [
        "Mon 06:01:02", "47.4500", "-122.3100", "↑ 045°", "140", "161", "1,200", "1,500.", " KSEA ",
    ];

    #[test]
    fn cleanup_rules_per_column() {
        assert_eq!(clean_cell(Field::Course, "↑ 045°"), "045");
        assert_eq!(clean_cell(Field::Rate, "250fpm"), "250fp");
        assert_eq!(clean_cell(Field::Feet, "1,234"), "1234");
        assert_eq!(clean_cell(Field::ReportingFacility, "\n  FlightAware ADS-B (KBFI) \n"), "FlightAware ADS-B (KBFI)");
        assert_eq!(clean_cell(Field::Kts, " 140 "), " 140 ");
    }

    #[test]
    fn one_full_row() {
        let doc = table(&[row("smallrow1", &CELLS)]);
        let pts = extract(&doc);
        assert_eq!(pts.len(), 1);
        let p = &pts[0];
        assert!(p.is_complete());
        assert_eq!(p.get(Field::Time), Some("Mon 06:01:02"));
        assert_eq!(p.get(Field::Course), Some("045"));
        assert_eq!(p.get(Field::Feet), Some("1200"));
        assert_eq!(p.get(Field::Rate), Some("1,500"));
        assert_eq!(p.get(Field::ReportingFacility), Some("KSEA"));
    }

    #[test]
    fn row_class_must_match_exactly() {
        let doc = table(&[
            row("smallrow1 extra", &CELLS),
            row("smallrow3", &CELLS),
            row("thirdHeader", &CELLS),
            row("smallrow2", &CELLS),
        ]);
        assert_eq!(extract(&doc).len(), 1);
    }

    #[test]
    fn rows_outside_target_table_are_ignored() {
        let other = format!("<table id=\"other\">{}</table>", row("smallrow1", &CELLS));
        let loose = row("smallrow2", &CELLS);
        assert!(extract(&format!("{other}{loose}")).is_empty());
    }

    #[test]
    fn table_id_is_token_matched() {
        let doc = format!("<table id=\"wide tracklogTable\">{}</table>", row("smallrow1", &CELLS));
        assert_eq!(extract(&doc).len(), 1);
        let doc = format!("<table id=\"tracklogTableX\">{}</table>", row("smallrow1", &CELLS));
        assert!(extract(&doc).is_empty());
    }

    #[test]
    fn short_row_is_sparse() {
        let doc = table(&[row("smallrow1", &CELLS[..3])]);
        let pts = extract(&doc);
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].len(), 3);
        assert_eq!(pts[0].get(Field::Lon), Some("-122.3100"));
        assert_eq!(pts[0].get(Field::Course), None);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let mut cells = CELLS.to_vec();
        cells.push("surplus");
        cells.push("more");
        let pts = extract(&table(&[row("smallrow1", &cells)]));
        assert_eq!(pts.len(), 1);
        assert!(pts[0].is_complete());
        assert_eq!(pts[0].get(Field::ReportingFacility), Some("KSEA"));
    }

    #[test]
    fn hidden_span_text_is_dropped() {
        let doc = table(&[s!(
            "<tr class=\"smallrow1\"><td><span class=\"show-for-medium-up\">06:01</span>\
             <span class=\"hide-for-medium-up\">6a</span></td>\
             <td><span class=\"x hide-for-medium-up\">only hidden</span></td></tr>"
        )]);
        let pts = extract(&doc);
        assert_eq!(pts[0].get(Field::Time), Some("06:01"));
        assert_eq!(pts[0].get(Field::Lat), None);
    }

    #[test]
    fn nested_span_does_not_end_suppression() {
        let doc = table(&[s!(
            "<tr class=\"smallrow1\"><td>keep<span class=\"hide-for-medium-up\">\
             <span>a</span>b</span></td></tr>"
        )]);
        let pts = extract(&doc);
        assert_eq!(pts[0].get(Field::Time), Some("keep"));
    }

    #[test]
    fn named_arrow_references_in_cells() {
        let mut cells = CELLS.to_vec();
        cells[3] = "&nwarr; 339&deg;";
        cells[4] = "&rarr; x&hellip;";
        let pts = extract(&table(&[row("smallrow1", &cells)]));
        assert_eq!(pts[0].get(Field::Course), Some("339"));
        assert_eq!(pts[0].get(Field::Kts), Some("→ x…"));
    }

    #[test]
    fn last_text_in_cell_wins() {
        let doc = table(&[s!("<tr class=\"smallrow2\"><td>a<b>b</b>c</td></tr>")]);
        assert_eq!(extract(&doc)[0].get(Field::Time), Some("c"));
    }

    #[test]
    fn unclosed_row_is_not_emitted() {
        let doc = "<table id=\"tracklogTable\"><tr class=\"smallrow1\"><td>x</td>";
        assert!(extract(doc).is_empty());
    }

    #[test]
    fn text_after_row_close_does_not_touch_point() {
        // cell left open across the row close
        let doc = table(&[s!("<tr class=\"smallrow1\"><td>a</tr>stray")]);
        let pts = extract(&doc);
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].get(Field::Time), Some("a"));
    }

    #[test]
    fn custom_layout_columns() {
        const COLS: [Field; 2] = [Field::Lon, Field::Lat];
        let layout = TableLayout { columns: &COLS, ..TableLayout::default() };
        let doc = table(&[row("smallrow1", &["1", "2", "3"])]);
        let pts = Extractor::new(layout).extract(&doc);
        assert_eq!(pts[0].get(Field::Lon), Some("1"));
        assert_eq!(pts[0].get(Field::Lat), Some("2"));
        assert_eq!(pts[0].len(), 2);
    }
}
