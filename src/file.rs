// src/file.rs

use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Read the whole saved page into memory.
pub fn load_document(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    logd!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
