#![allow(dead_code)]

use anyhow::{Context, Result};
use kuikly_libs::{CATALOG_FILE, ComponentRecord, VcsClient, VcsError, VcsOutput};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Temporary mirror root with the layout the CLI expects:
// <root>/references/KuiklyUI-third-party/KuiklyUI-Libraries.json
pub struct TempMirror {
    dir: TempDir,
}

impl TempMirror {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("creating temp mirror root")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn checkout_path(&self) -> PathBuf {
        self.root().join("references").join("KuiklyUI-third-party")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.checkout_path().join(CATALOG_FILE)
    }

    /// Write `value` as the catalog file, creating the checkout skeleton
    /// (including a `.git` directory so the checkout reads as valid).
    pub fn write_catalog(&self, value: &Value) -> Result<PathBuf> {
        let checkout = self.checkout_path();
        fs::create_dir_all(checkout.join(".git")).context("creating checkout skeleton")?;
        let path = self.catalog_path();
        fs::write(&path, serde_json::to_string_pretty(value)?)
            .with_context(|| format!("writing catalog at {}", path.display()))?;
        Ok(path)
    }
}

/// Catalog fixture mirroring the upstream shape, including the records the
/// lookup-precedence cases rely on.
pub fn sample_catalog() -> Value {
    json!([
        {
            "componentName": "Chart",
            "componentDescription": "Basic chart primitives",
            "componentType": "UI",
            "developer": "acme",
            "githubUrl": "https://github.com/acme/chart",
            "Android": true,
            "iOS": true
        },
        {
            "componentName": "ChartView",
            "componentDescription": "Composed chart view with legends",
            "componentType": "UI",
            "githubUrl": "https://github.com/acme/chart-view",
            "Android": true
        },
        {
            "componentName": "EChartsView",
            "componentDescription": "Apache ECharts wrapper",
            "componentType": "UI",
            "githubUrl": "https://github.com/acme/echarts-view",
            "Android": true,
            "iOS": true,
            "Ohos": true,
            "examples": [{"title": "line"}, {"title": "pie"}]
        },
        {
            "componentName": "Lottie",
            "componentDescription": "Animation playback",
            "componentType": "Animation",
            "githubUrl": "https://github.com/acme/lottie"
        }
    ])
}

pub fn parse_records(value: &Value) -> Result<Vec<ComponentRecord>> {
    serde_json::from_value(value.clone()).context("parsing record fixtures")
}

pub fn vcs_output(success: bool, stdout: &str, stderr: &str) -> VcsOutput {
    VcsOutput {
        success,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}

// Scripted collaborator: returns canned outputs, records the operations it
// was asked to perform, and mimics git's on-disk side effect (a successful
// clone materializes the checkout with its `.git` directory).
pub struct ScriptedVcs {
    clone_result: VcsOutput,
    pull_result: VcsOutput,
    calls: RefCell<Vec<String>>,
}

impl ScriptedVcs {
    pub fn succeeding() -> Self {
        Self {
            clone_result: vcs_output(true, "", "Cloning into 'KuiklyUI-third-party'..."),
            pull_result: vcs_output(true, "Already up to date.", ""),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_clone_result(mut self, result: VcsOutput) -> Self {
        self.clone_result = result;
        self
    }

    pub fn with_pull_result(mut self, result: VcsOutput) -> Self {
        self.pull_result = result;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VcsClient for ScriptedVcs {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<VcsOutput, VcsError> {
        self.calls.borrow_mut().push(format!("clone {url}"));
        if self.clone_result.success {
            fs::create_dir_all(dest.join(".git")).expect("scripted clone side effect");
        }
        Ok(self.clone_result.clone())
    }

    fn pull(&self, checkout: &Path) -> Result<VcsOutput, VcsError> {
        self.calls
            .borrow_mut()
            .push(format!("pull {}", checkout.display()));
        if self.pull_result.success {
            let fetch_head = checkout.join(".git").join("FETCH_HEAD");
            fs::write(fetch_head, "deadbeef branch 'main'").expect("scripted pull side effect");
        }
        Ok(self.pull_result.clone())
    }
}
