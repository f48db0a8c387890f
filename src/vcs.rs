//! Capability seam around the external version-control client.
//!
//! The sync controller never shells out directly; it talks to a [`VcsClient`]
//! and classifies the [`VcsOutput`] it gets back. [`GitCli`] is the
//! production implementation, invoking the `git` binary synchronously and
//! capturing both streams. Tests substitute a scripted implementation so the
//! controller's state machine can be exercised without network or git.

use log::debug;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Raw outcome of one collaborator invocation.
///
/// `success` reflects the process exit status; stream classification (error
/// markers, informational text) is the sync controller's job.
#[derive(Debug, Clone)]
pub struct VcsOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// The collaborator process could not be invoked at all.
#[derive(Debug, Error)]
#[error("failed to invoke {program}: {source}")]
pub struct VcsError {
    pub program: String,
    #[source]
    pub source: io::Error,
}

/// Clone/pull capability the sync controller depends on.
pub trait VcsClient {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<VcsOutput, VcsError>;
    fn pull(&self, checkout: &Path) -> Result<VcsOutput, VcsError>;
}

impl<T: VcsClient + ?Sized> VcsClient for &T {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<VcsOutput, VcsError> {
        (**self).clone_repo(url, dest)
    }

    fn pull(&self, checkout: &Path) -> Result<VcsOutput, VcsError> {
        (**self).pull(checkout)
    }
}

/// Production client shelling out to the `git` binary.
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }

    /// Override the git program, e.g. an absolute path or a wrapper script.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&OsStr], cwd: Option<&Path>) -> Result<VcsOutput, VcsError> {
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        debug!(
            "running {} {}",
            self.program.to_string_lossy(),
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        let output = command.output().map_err(|source| VcsError {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })?;
        Ok(VcsOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsClient for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<VcsOutput, VcsError> {
        self.run(
            &[OsStr::new("clone"), OsStr::new(url), dest.as_os_str()],
            None,
        )
    }

    fn pull(&self, checkout: &Path) -> Result<VcsOutput, VcsError> {
        self.run(&[OsStr::new("pull")], Some(checkout))
    }
}
