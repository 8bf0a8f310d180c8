// src/config/consts.rs

// Page layout
pub const TRACKLOG_TABLE_ID: &str = "tracklogTable";
pub const DATA_ROW_CLASSES: [&str; 2] = ["smallrow1", "smallrow2"];
pub const HIDDEN_SPAN_CLASS: &str = "hide-for-medium-up";

// KML style
pub const DEFAULT_TRACK_NAME: &str = "Track";
pub const DEFAULT_LINE_COLOR: &str = "ff0000ff"; // opaque red (aabbggrr)
pub const DEFAULT_FILL_COLOR: &str = "7f0000ff"; // translucent red
pub const DEFAULT_LINE_WIDTH: u32 = 4;
pub const STYLE_ID: &str = "trackStyle";
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
pub const ALTITUDE_MODE: &str = "absolute";
