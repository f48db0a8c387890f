//! Local mirror of the KuiklyUI third-party component catalog.
//!
//! The crate has two independent entry points wired through the `kuikly-libs`
//! binary: `sync` keeps a git checkout of the upstream catalog repository
//! reasonably fresh (clone when absent, pull when older than the staleness
//! window), and `list`/`search`/`get` answer queries over the JSON catalog
//! found in that checkout. Sync decisions live in [`sync`] and [`freshness`];
//! the actual clone/pull is delegated to an external git client behind the
//! [`vcs::VcsClient`] seam. Queries load the catalog fresh from disk on every
//! invocation and operate on an immutable in-memory sequence.

pub mod catalog;
pub mod freshness;
pub mod render;
pub mod sync;
pub mod vcs;

pub use catalog::{
    CATALOG_FILE, CatalogError, ComponentRecord, Platform, get_by_name, list_all, load_catalog,
    search,
};
pub use freshness::{STALENESS_WINDOW, is_stale, is_stale_at};
pub use sync::{SyncController, SyncError, SyncOutcome, checkout_is_valid, last_fetch_time};
pub use vcs::{GitCli, VcsClient, VcsError, VcsOutput};

use std::env;
use std::path::{Path, PathBuf};

/// Upstream repository holding the component catalog.
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/Tencent-TDS/KuiklyUI-third-party.git";

/// Checkouts live under `<root>/references/`, one directory per remote.
pub const REFERENCES_DIR: &str = "references";

pub const ENV_ROOT: &str = "KUIKLY_LIBS_ROOT";
pub const ENV_REMOTE_URL: &str = "KUIKLY_LIBS_REMOTE_URL";
pub const ENV_CATALOG_PATH: &str = "KUIKLY_LIBS_CATALOG_PATH";

/// Resolve the mirror root: CLI flag, then `KUIKLY_LIBS_ROOT`, then the
/// current directory.
pub fn resolve_mirror_root(cli_root: Option<&Path>) -> PathBuf {
    if let Some(root) = cli_root {
        return root.to_path_buf();
    }
    if let Some(root) = env::var_os(ENV_ROOT) {
        if !root.is_empty() {
            return PathBuf::from(root);
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve the remote URL: CLI flag, then `KUIKLY_LIBS_REMOTE_URL`, then the
/// compiled-in upstream.
pub fn resolve_remote_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }
    match env::var(ENV_REMOTE_URL) {
        Ok(url) if !url.is_empty() => url,
        _ => DEFAULT_REMOTE_URL.to_string(),
    }
}

/// Directory name for a checkout, derived from the last path segment of the
/// remote URL with any `.git` suffix stripped.
pub fn checkout_name_from_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let name = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed)
        .trim_end_matches(".git");
    if name.is_empty() {
        "catalog".to_string()
    } else {
        name.to_string()
    }
}

/// Where the checkout for `url` lives under the mirror root.
pub fn default_checkout_path(root: &Path, url: &str) -> PathBuf {
    root.join(REFERENCES_DIR).join(checkout_name_from_url(url))
}

/// Resolve the catalog file: CLI flag, then `KUIKLY_LIBS_CATALOG_PATH`, then
/// the fixed location at the checkout root.
pub fn resolve_catalog_path(root: &Path, cli_catalog: Option<&Path>, url: &str) -> PathBuf {
    if let Some(path) = cli_catalog {
        return path.to_path_buf();
    }
    if let Some(path) = env::var_os(ENV_CATALOG_PATH) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    default_checkout_path(root, url).join(CATALOG_FILE)
}
