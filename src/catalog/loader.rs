//! Catalog loading and its error taxonomy.
//!
//! The catalog file is produced upstream; this loader only reads it.
//! Failure kinds are kept distinct so the CLI can give targeted guidance: a
//! missing file means "run sync first", a parse failure surfaces the
//! serde_json diagnostic verbatim. One deliberate exception to fail-fast:
//! a well-formed file whose top level is not an array (say `{}`) degrades
//! to an empty catalog instead of erroring.

use crate::catalog::model::ComponentRecord;
use log::warn;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found at {}; run `kuikly-libs sync` first", path.display())]
    NotFound { path: PathBuf },
    #[error("catalog at {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read catalog at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read and parse the catalog into an ordered sequence of records.
///
/// Order is the source file's insertion order and is preserved all the way
/// to `list` output. The missing-file case is distinguished by the read
/// error kind, never by a pre-check, so it can never be misreported as a
/// parse failure.
pub fn load_catalog(path: &Path) -> Result<Vec<ComponentRecord>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_array() {
        warn!(
            "catalog at {} has {} at the top level, treating as empty",
            path.display(),
            json_kind(&value)
        );
        return Ok(Vec::new());
    }

    serde_json::from_value(value).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
