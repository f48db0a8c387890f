// Catalog loader and query engine guard rails.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use common::{TempMirror, parse_records, sample_catalog};
use kuikly_libs::{CatalogError, get_by_name, list_all, load_catalog, search};
use serde_json::json;
use std::fs;

#[test]
fn missing_file_is_not_found_never_parse() -> Result<()> {
    let mirror = TempMirror::new()?;
    let err = load_catalog(&mirror.catalog_path()).expect_err("missing file should fail");
    assert!(matches!(err, CatalogError::NotFound { .. }), "got {err}");
    assert!(
        err.to_string().contains("run `kuikly-libs sync` first"),
        "guidance missing from: {err}"
    );
    Ok(())
}

#[test]
fn malformed_json_is_a_parse_error() -> Result<()> {
    let mirror = TempMirror::new()?;
    let path = mirror.write_catalog(&json!([]))?;
    fs::write(&path, "{not json")?;
    let err = load_catalog(&path).expect_err("malformed content should fail");
    assert!(matches!(err, CatalogError::Parse { .. }), "got {err}");
    Ok(())
}

#[test]
fn non_array_top_level_degrades_to_empty() -> Result<()> {
    let mirror = TempMirror::new()?;
    let path = mirror.write_catalog(&json!({}))?;
    let records = load_catalog(&path)?;
    assert!(records.is_empty());
    assert!(list_all(&records).is_empty());
    Ok(())
}

#[test]
fn malformed_element_is_a_parse_error() -> Result<()> {
    let mirror = TempMirror::new()?;
    let path = mirror.write_catalog(&json!(["just a string"]))?;
    let err = load_catalog(&path).expect_err("non-object element should fail");
    assert!(matches!(err, CatalogError::Parse { .. }), "got {err}");
    Ok(())
}

#[test]
fn load_preserves_catalog_order() -> Result<()> {
    let mirror = TempMirror::new()?;
    let path = mirror.write_catalog(&sample_catalog())?;
    let records = load_catalog(&path)?;
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Chart", "ChartView", "EChartsView", "Lottie"]);

    let listed = list_all(&records);
    assert_eq!(listed.len(), records.len());
    assert_eq!(listed[0].name, "Chart");
    Ok(())
}

#[test]
fn search_matches_name_and_description_case_insensitively() -> Result<()> {
    let records = parse_records(&sample_catalog())?;

    let by_name = search(&records, "CHART");
    let names: Vec<&str> = by_name.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Chart", "ChartView", "EChartsView"]);

    let by_description = search(&records, "animation");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "Lottie");

    assert!(search(&records, "nonexistent").is_empty());
    Ok(())
}

#[test]
fn search_is_a_superset_safe_filter() -> Result<()> {
    let records = parse_records(&sample_catalog())?;
    for keyword in ["chart", "view", "e", "apache", ""] {
        let matched = search(&records, keyword);
        let listed = list_all(&records);

        for record in &matched {
            assert!(
                listed.iter().any(|candidate| candidate.name == record.name),
                "search result {} missing from list", record.name
            );
        }
        let needle = keyword.to_lowercase();
        for record in listed {
            let hit = record.name.to_lowercase().contains(&needle)
                || record
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle));
            assert_eq!(
                hit,
                matched.iter().any(|candidate| candidate.name == record.name),
                "filter disagreement for {} on '{keyword}'", record.name
            );
        }
    }
    Ok(())
}

#[test]
fn exact_match_wins_over_earlier_partial() -> Result<()> {
    let records = parse_records(&sample_catalog())?;
    // "ChartView" also contains "chart" but the exact pass runs first.
    let record = get_by_name(&records, "chart").expect("lookup should match");
    assert_eq!(record.name, "Chart");

    // Same precedence when the partial match sits earlier in the catalog.
    let reversed = parse_records(&json!([
        {"componentName": "ChartView"},
        {"componentName": "Chart"}
    ]))?;
    assert_eq!(get_by_name(&reversed, "CHART").unwrap().name, "Chart");
    Ok(())
}

#[test]
fn partial_match_is_the_fallback() -> Result<()> {
    let records = parse_records(&json!([
        {"componentName": "EChartsView", "componentDescription": "Apache ECharts wrapper"}
    ]))?;
    let record = get_by_name(&records, "echarts").expect("substring fallback should match");
    assert_eq!(record.name, "EChartsView");

    assert!(get_by_name(&records, "lottie").is_none());
    Ok(())
}
