//! Repository sync controller.
//!
//! Orchestrates "ensure the local checkout exists and is fresh" over two
//! states: **Absent** (no valid checkout) always clones; **Present** pulls
//! when forced or when the freshness policy says the checkout is stale, and
//! is a no-op otherwise. The controller never records sync time itself:
//! git updates `.git/FETCH_HEAD` as a side effect of clone/pull, and the
//! next invocation re-derives the timestamp from filesystem metadata.
//!
//! Outcome classification: a clone fails when the git process exits
//! non-zero. A pull fails only when stderr carries an error marker; git
//! routinely writes informational text ("Already up to date.") to either
//! stream on success, so exit status alone is not the signal.

use crate::freshness::{STALENESS_WINDOW, is_stale_at};
use crate::vcs::{VcsClient, VcsError, VcsOutput};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use thiserror::Error;

/// Case-insensitive substring that marks a pull diagnostic as a failure.
const ERROR_MARKER: &str = "error";

/// What `ensure_synced` did to reach a current checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No valid checkout existed; a fresh clone was made.
    Cloned,
    /// The checkout existed and a pull ran (forced or stale).
    Pulled,
    /// The checkout existed and was within the staleness window; the remote
    /// was not contacted.
    FreshEnough,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to prepare {}: {source}", path.display())]
    Prepare {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Vcs(#[from] VcsError),
    #[error("git {operation} failed: {detail}")]
    Collaborator {
        operation: &'static str,
        detail: String,
    },
}

/// A valid checkout needs both the target directory and its `.git` metadata
/// subdirectory.
pub fn checkout_is_valid(checkout: &Path) -> bool {
    checkout.is_dir() && checkout.join(".git").is_dir()
}

/// Timestamp of the last successful fetch or clone, derived from filesystem
/// metadata: mtime of `.git/FETCH_HEAD` when present, else mtime of `.git`
/// itself (a clone does not create FETCH_HEAD), else absent.
pub fn last_fetch_time(checkout: &Path) -> Option<SystemTime> {
    let git_dir = checkout.join(".git");
    mtime(&git_dir.join("FETCH_HEAD")).or_else(|| mtime(&git_dir))
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok()?.modified().ok()
}

pub struct SyncController<V> {
    vcs: V,
    window: Duration,
}

impl<V: VcsClient> SyncController<V> {
    pub fn new(vcs: V) -> Self {
        Self {
            vcs,
            window: STALENESS_WINDOW,
        }
    }

    /// Same controller with a custom staleness window. Production always
    /// uses the seven-day default; tests narrow it to force the stale path.
    pub fn with_window(vcs: V, window: Duration) -> Self {
        Self { vcs, window }
    }

    /// Ensure a current checkout of `url` exists at `checkout`.
    ///
    /// Atomic from the caller's perspective: either the returned outcome
    /// holds, or an error describes the single step that failed. No retries.
    pub fn ensure_synced(
        &self,
        url: &str,
        checkout: &Path,
        force: bool,
    ) -> Result<SyncOutcome, SyncError> {
        if !checkout_is_valid(checkout) {
            return self.clone_checkout(url, checkout);
        }

        debug!("checkout found at {}", checkout.display());
        if force {
            info!("force refresh requested");
            return self.pull_checkout(checkout);
        }

        let last_fetch = last_fetch_time(checkout);
        if is_stale_at(last_fetch, SystemTime::now(), self.window) {
            if let Some(days) = days_since(last_fetch) {
                info!("checkout last updated {days} days ago, refresh needed");
            } else {
                info!("no fetch marker found, refresh needed");
            }
            return self.pull_checkout(checkout);
        }

        if let Some(days) = days_since(last_fetch) {
            debug!("checkout last updated {days} days ago, no refresh needed");
        }
        Ok(SyncOutcome::FreshEnough)
    }

    fn clone_checkout(&self, url: &str, checkout: &Path) -> Result<SyncOutcome, SyncError> {
        if let Some(parent) = checkout.parent() {
            fs::create_dir_all(parent).map_err(|source| SyncError::Prepare {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        info!("cloning {url} into {}", checkout.display());
        let output = self.vcs.clone_repo(url, checkout)?;
        if !output.success {
            return Err(SyncError::Collaborator {
                operation: "clone",
                detail: diagnostic(&output),
            });
        }
        Ok(SyncOutcome::Cloned)
    }

    fn pull_checkout(&self, checkout: &Path) -> Result<SyncOutcome, SyncError> {
        info!("pulling latest changes in {}", checkout.display());
        let output = self.vcs.pull(checkout)?;
        if output.stderr.to_lowercase().contains(ERROR_MARKER) {
            return Err(SyncError::Collaborator {
                operation: "pull",
                detail: diagnostic(&output),
            });
        }
        let stdout = output.stdout.trim();
        if !stdout.is_empty() {
            info!("{stdout}");
        }
        Ok(SyncOutcome::Pulled)
    }
}

fn days_since(last: Option<SystemTime>) -> Option<u64> {
    let elapsed = SystemTime::now().duration_since(last?).ok()?;
    Some(elapsed.as_secs() / (24 * 60 * 60))
}

fn diagnostic(output: &VcsOutput) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = output.stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    "collaborator exited without diagnostic output".to_string()
}
