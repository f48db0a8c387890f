//! Component catalog wiring.
//!
//! This module wraps the JSON catalog produced upstream (a single
//! `KuiklyUI-Libraries.json` at the checkout root) so the CLI can load an
//! ordered, immutable sequence of [`ComponentRecord`]s and run queries over
//! it. The loader surfaces structural errors; the query engine never
//! mutates the loaded sequence.

pub mod loader;
pub mod model;
pub mod query;

pub use loader::{CatalogError, load_catalog};
pub use model::{ComponentRecord, Platform};
pub use query::{get_by_name, list_all, search};

/// Catalog file name expected at the checkout root.
pub const CATALOG_FILE: &str = "KuiklyUI-Libraries.json";
