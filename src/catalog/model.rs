//! Catalog record types.
//!
//! Field names mirror the upstream JSON (`componentName`, flat per-platform
//! booleans, ...). Every field except the name is optional in the source
//! data; absent platform flags mean "unsupported". Unknown fields are
//! ignored so upstream can grow the schema without breaking lookups.

use serde::Deserialize;
use serde_json::Value;

/// Platform targets the catalog tracks, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Ohos,
    Js,
    Macos,
    Linux,
    Windows,
    Tvos,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Android,
        Platform::Ios,
        Platform::Ohos,
        Platform::Js,
        Platform::Macos,
        Platform::Linux,
        Platform::Windows,
        Platform::Tvos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Ohos => "Ohos",
            Platform::Js => "Js",
            Platform::Macos => "Macos",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::Tvos => "Tvos",
        }
    }
}

/// One entry in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentRecord {
    #[serde(rename = "componentName", default)]
    pub name: String,
    #[serde(rename = "componentDescription", default)]
    pub description: Option<String>,
    #[serde(rename = "componentType", default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(rename = "githubUrl", default)]
    pub github_url: Option<String>,
    #[serde(rename = "Android", default)]
    pub android: bool,
    #[serde(rename = "iOS", default)]
    pub ios: bool,
    #[serde(rename = "Ohos", default)]
    pub ohos: bool,
    #[serde(rename = "Js", default)]
    pub js: bool,
    #[serde(rename = "Macos", default)]
    pub macos: bool,
    #[serde(rename = "Linux", default)]
    pub linux: bool,
    #[serde(rename = "Windows", default)]
    pub windows: bool,
    #[serde(rename = "Tvos", default)]
    pub tvos: bool,
    /// Opaque example descriptors; only the count is meaningful here.
    #[serde(default)]
    pub examples: Vec<Value>,
}

impl ComponentRecord {
    pub fn supports(&self, platform: Platform) -> bool {
        match platform {
            Platform::Android => self.android,
            Platform::Ios => self.ios,
            Platform::Ohos => self.ohos,
            Platform::Js => self.js,
            Platform::Macos => self.macos,
            Platform::Linux => self.linux,
            Platform::Windows => self.windows,
            Platform::Tvos => self.tvos,
        }
    }

    /// Supported platforms in canonical order; empty when no flag is set.
    pub fn supported_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|platform| self.supports(*platform))
            .collect()
    }
}
