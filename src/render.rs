//! Human-readable rendering of catalog records.
//!
//! Output shapes match what the query commands print: numbered summary
//! blocks for list/search and a banner block for a single component. The
//! platforms line lists supported targets in canonical order and is omitted
//! entirely when none are set, as is the examples line at zero.

use crate::catalog::model::ComponentRecord;
use std::fmt::Write;

const RULE: &str = "--------------------------------------------------------------------------------";
const BANNER: &str = "================================================================================";

const NO_DESCRIPTION: &str = "No description";
const NOT_AVAILABLE: &str = "N/A";

pub fn render_list(records: &[&ComponentRecord]) -> String {
    if records.is_empty() {
        return "No components found in the catalog".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Total components: {}\n", records.len());
    out.push_str(RULE);
    out.push('\n');
    for (idx, record) in records.iter().enumerate() {
        render_entry(&mut out, idx + 1, record);
    }
    out
}

pub fn render_search(keyword: &str, matches: &[&ComponentRecord]) -> String {
    if matches.is_empty() {
        return format!("No components found matching '{keyword}'");
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} component(s) matching '{keyword}':\n",
        matches.len()
    );
    out.push_str(RULE);
    out.push('\n');
    for (idx, record) in matches.iter().enumerate() {
        render_entry(&mut out, idx + 1, record);
    }
    out
}

fn render_entry(out: &mut String, idx: usize, record: &ComponentRecord) {
    let _ = writeln!(out, "{idx}. {}", record.name);
    let _ = writeln!(
        out,
        "   Type: {}",
        record.component_type.as_deref().unwrap_or(NOT_AVAILABLE)
    );
    let _ = writeln!(
        out,
        "   Description: {}",
        record.description.as_deref().unwrap_or(NO_DESCRIPTION)
    );
    let _ = writeln!(
        out,
        "   GitHub: {}",
        record.github_url.as_deref().unwrap_or(NOT_AVAILABLE)
    );
    out.push_str(RULE);
    out.push('\n');
}

pub fn render_details(record: &ComponentRecord) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    let _ = writeln!(out, "\nComponent: {}", record.name);
    out.push_str(BANNER);
    let _ = writeln!(
        out,
        "\n\nType: {}",
        record.component_type.as_deref().unwrap_or(NOT_AVAILABLE)
    );
    let _ = writeln!(
        out,
        "Developer: {}",
        record.developer.as_deref().unwrap_or(NOT_AVAILABLE)
    );
    let _ = writeln!(
        out,
        "\nDescription: {}",
        record.description.as_deref().unwrap_or(NO_DESCRIPTION)
    );
    let _ = writeln!(
        out,
        "\nGitHub URL: {}",
        record.github_url.as_deref().unwrap_or(NOT_AVAILABLE)
    );

    let platforms = record.supported_platforms();
    if !platforms.is_empty() {
        let names: Vec<&str> = platforms.iter().map(|platform| platform.as_str()).collect();
        let _ = writeln!(out, "\nSupported Platforms: {}", names.join(", "));
    }

    if !record.examples.is_empty() {
        let _ = writeln!(out, "\nExamples: {} available", record.examples.len());
    }

    out.push_str(BANNER);
    out
}
