// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod track;

pub mod csv;
pub mod file;
pub mod kml;

pub use error::{Error, Result};
pub use track::{extract, Field, TrackPoint};
