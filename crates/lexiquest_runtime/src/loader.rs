//! Catalog loading from disk and the bundled default catalog.

use std::fs;
use std::path::Path;

use lexiquest_catalog::Catalog;
use lexiquest_foundation::{Error, Result};

/// The catalog document compiled into the binary.
const DEFAULT_CATALOG_JSON: &str = include_str!("../data/words.json");

/// Loads and validates a catalog document from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, a parse error if the
/// document is malformed, or a validation error for bad records.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let json = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to read catalog '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    let catalog = Catalog::from_json(&json)?;
    tracing::info!(
        path = %path.as_ref().display(),
        words = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Returns the catalog bundled into the binary.
///
/// # Errors
///
/// Returns an error only if the bundled document is invalid, which the
/// test suite rules out.
pub fn default_catalog() -> Result<Catalog> {
    Catalog::from_json(DEFAULT_CATALOG_JSON)
}
