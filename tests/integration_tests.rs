use std::collections::BTreeSet;
use std::io::Read;
use stem_leaf_plot::core::render::format_rows;
use stem_leaf_plot::{
    generate_primes, group_by_stem, LocalStorage, PlotEngine, PlotPipeline, PlotSession,
    TomlConfig,
};
use tempfile::TempDir;

fn read_bundle(path: &std::path::Path) -> zip::ZipArchive<std::io::Cursor<Vec<u8>>> {
    let data = std::fs::read(path).unwrap();
    zip::ZipArchive::new(std::io::Cursor::new(data)).unwrap()
}

#[test]
fn test_end_to_end_bundle_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let toml_content = format!(
        r#"
[plot]
limit = 110

[load]
output_path = "{}"
output_formats = ["text", "csv", "tsv", "json"]
"#,
        output_path.replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();

    let storage = LocalStorage::new(output_path.clone());
    let engine = PlotEngine::new(PlotPipeline::new(storage, config));
    let run = engine.run().unwrap();

    assert!(run.output_path.ends_with("plot_output.zip"));
    assert_eq!(run.snapshot.primes.len(), 29);

    let mut archive = read_bundle(&temp_dir.path().join("plot_output.zip"));
    assert_eq!(archive.len(), 4);

    let names: BTreeSet<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    let expected: BTreeSet<String> = ["plot.txt", "stem_leaf.csv", "stem_leaf.tsv", "plot.json"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, expected);

    let mut text = String::new();
    archive
        .by_name("plot.txt")
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    assert!(text.contains("Prime numbers up to 110:"));
    assert!(text.contains("2, 3, 5, 7, 11"));
    assert!(text.trim_end().ends_with("10 | 1 3 7 9"));

    let mut json = String::new();
    archive
        .by_name("plot.json")
        .unwrap()
        .read_to_string(&mut json)
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["primes"].as_array().map(Vec::len), Some(29));
    assert_eq!(report["primes"][28], 109);
}

#[test]
fn test_stems_for_110_cover_zero_through_ten() {
    let map = group_by_stem(&generate_primes(110).unwrap());
    let stems: Vec<u64> = map.stems().collect();
    assert_eq!(stems, (0..=10).collect::<Vec<u64>>());

    // Reassembling stem * 10 + leaf gives back the primes.
    let rebuilt: Vec<u64> = map
        .sorted_rows()
        .into_iter()
        .flat_map(|(stem, leaves)| leaves.into_iter().map(move |leaf| stem * 10 + leaf))
        .collect();
    assert_eq!(rebuilt, generate_primes(110).unwrap());
}

#[test]
fn test_toggle_session_matches_both_limits() {
    let mut session = PlotSession::default();

    let rows_110 = format_rows(&session.snapshot().unwrap().stem_leaf, " ");
    session.toggle();
    let rows_150 = format_rows(&session.snapshot().unwrap().stem_leaf, " ");

    assert_eq!(rows_110.len(), 11);
    assert_eq!(rows_150.len(), 15);
    assert_eq!(rows_150.last().map(String::as_str), Some("14 | 9"));
    assert_eq!(rows_150[11], "11 | 3");
    assert_eq!(rows_150[12], "12 | 7");
    assert_eq!(rows_150[13], "13 | 1 7 9");
}

#[test]
fn test_invalid_limit_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let toml_content = format!(
        "[plot]\nlimit = -5\n\n[load]\noutput_path = \"{}\"\noutput_formats = [\"text\"]\n",
        output_path.replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();

    let storage = LocalStorage::new(output_path);
    let engine = PlotEngine::new(PlotPipeline::new(storage, config));
    let err = engine.run().unwrap_err();

    assert!(matches!(err, stem_leaf_plot::PlotError::InvalidArgument { .. }));
    assert!(!temp_dir.path().join("plot_output.zip").exists());
}
