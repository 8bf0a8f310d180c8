// src/error.rs
use std::{io, path::PathBuf};

use crate::track::Field;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong number of positional arguments or an unknown flag.
    #[error("usage: {program} [options] <filename.html>")]
    Usage { program: String },

    #[error("invalid value for {flag}: {value}")]
    InvalidArg { flag: String, value: String },

    #[error("invalid color `{0}` (expected 8 hex digits, aabbggrr)")]
    InvalidColor(String),

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A point reached the renderer without one of its coordinate fields.
    #[error("track point #{index} has no `{field}` value")]
    MissingField { index: usize, field: Field },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
