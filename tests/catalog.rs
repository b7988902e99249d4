//! Region table loading behavior

use floodkit::catalog::RegionTable;
use floodkit::config::RegionsConfig;
use floodkit::pipeline::FloodError;

#[test]
fn embedded_catalog_holds_the_demo_regions() {
    let table = RegionTable::embedded().unwrap();

    assert_eq!(table.len(), 5);
    for name in ["himayatsagar", "hussansagar", "osmansagar", "sriramsagar", "karanja"] {
        assert!(table.get(name).is_some(), "missing region '{}'", name);
    }
}

#[test]
fn empty_table_path_selects_the_embedded_catalog() {
    let table = RegionTable::load(&RegionsConfig::default()).unwrap();
    assert_eq!(table.len(), 5);
}

#[test]
fn lookup_is_case_insensitive() {
    let table = RegionTable::embedded().unwrap();

    let region = table.get("  Osmansagar ").unwrap();
    assert_eq!(region.key, "osmansagar");
    assert_eq!(region.name, "Osmansagar");
    assert_eq!(region.geometry.as_str(), "projects/floodkit-demo/assets/osmansagar");
}

#[test]
fn unknown_name_is_not_found() {
    let table = RegionTable::embedded().unwrap();
    assert!(table.get("atlantis").is_none());
}

#[test]
fn custom_csv_round_trips() {
    let csv = "ROI_Name,ROI_path\nBlue Lake,assets/blue_lake\n";
    let table = RegionTable::from_reader(csv.as_bytes(), "inline").unwrap();

    let region = table.get("blue lake").unwrap();
    assert_eq!(region.name, "Blue Lake");
    assert_eq!(region.geometry.as_str(), "assets/blue_lake");
    assert_eq!(region.source, "inline");
}

#[test]
fn duplicate_names_keep_the_later_row() {
    let csv = "ROI_Name,ROI_path\nLake,assets/first\nLake,assets/second\n";
    let table = RegionTable::from_reader(csv.as_bytes(), "inline").unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("lake").unwrap().geometry.as_str(), "assets/second");
}

#[test]
fn a_table_without_rows_is_rejected() {
    let csv = "ROI_Name,ROI_path\n";
    let result = RegionTable::from_reader(csv.as_bytes(), "inline");

    assert!(matches!(result, Err(FloodError::ConfigError(_))));
}

#[test]
fn iteration_follows_stable_key_order() {
    let table = RegionTable::embedded().unwrap();
    let keys: Vec<&str> = table.keys().collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
