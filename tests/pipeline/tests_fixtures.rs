//! End-to-end runs over the annotated script fixtures

use rstest::rstest;
use ywmarkup::{ModelerConfig, PipelineConfig, SourceId, run};

use crate::helpers::model_assertions::{
    assert_channels_well_formed, bindings, channel_links, child_names, get_program,
};
use crate::helpers::source_fixtures::{
    all_fixtures, comments_of, extract_fixture, extract_fixture_with,
};

#[test]
fn test_every_fixture_builds() {
    let fixtures = all_fixtures();
    assert!(!fixtures.is_empty(), "no fixtures found");

    for path in fixtures {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap();
        let extraction = extract_fixture(name);
        let model = extraction.model();
        assert!(model.root().is_some(), "{} has no root workflow", name);
        assert_channels_well_formed(model);
    }
}

// ============================================================================
// simulate_data_collection.py
// ============================================================================

#[test]
fn test_data_collection_structure() {
    let extraction = extract_fixture("simulate_data_collection.py");
    let model = extraction.model();
    let root = model.root().unwrap();

    assert_eq!(root.name.as_str(), "simulate_data_collection");
    assert_eq!(
        child_names(model, root),
        [
            "initialize_run",
            "load_screening_results",
            "calculate_strategy",
            "log_rejected_sample",
            "collect_data_set",
            "transform_images",
            "log_collected_sample",
        ]
    );
    assert!(model.children(root.id).all(|c| !c.is_workflow()));
    assert_eq!(
        bindings(model, &root.in_ports),
        ["cassette_id", "sample_score_cutoff", "sample_spreadsheet", "calibration_image"]
    );
    assert_eq!(
        bindings(model, &root.out_ports),
        ["corrected_image", "run_log", "collected_samples", "rejected_samples"]
    );
}

#[test]
fn test_data_collection_channels() {
    let extraction = extract_fixture("simulate_data_collection.py");
    let model = extraction.model();
    let links = channel_links(model, "simulate_data_collection");

    assert_eq!(links.len(), 18);

    let cassette: Vec<_> = links
        .iter()
        .filter(|(binding, _, _)| *binding == "cassette_id")
        .map(|(_, from, to)| (*from, *to))
        .collect();
    assert_eq!(
        cassette,
        [
            ("simulate_data_collection", "load_screening_results"),
            ("simulate_data_collection", "log_rejected_sample"),
            ("simulate_data_collection", "collect_data_set"),
            ("simulate_data_collection", "log_collected_sample"),
        ]
    );

    let sample_id: Vec<_> = links
        .iter()
        .filter(|(binding, _, _)| *binding == "sample_id")
        .map(|(_, _, to)| *to)
        .collect();
    assert_eq!(sample_id, ["transform_images", "log_collected_sample"]);

    assert!(links.contains(&("corrected_image", "transform_images", "simulate_data_collection")));
    assert!(links.contains(&("accepted_sample", "calculate_strategy", "collect_data_set")));
}

#[test]
fn test_data_collection_descriptions_and_uris() {
    let extraction = extract_fixture("simulate_data_collection.py");
    let model = extraction.model();
    let root = model.root().unwrap();

    let cutoff = model
        .in_ports(root.id)
        .find(|p| p.binding.as_str() == "sample_score_cutoff")
        .unwrap();
    assert!(cutoff.is_parameter());
    assert_eq!(
        cutoff.description.as_deref(),
        Some("The minimum quality score required of samples")
    );

    let spreadsheet = model
        .data_in(root.id)
        .find(|d| d.name.as_str() == "sample_spreadsheet")
        .unwrap();
    assert_eq!(
        spreadsheet.uri.as_deref(),
        Some("file:cassette_{cassette_id}_spreadsheet.csv")
    );
    assert_eq!(spreadsheet.ports.len(), 2);
}

// ============================================================================
// clean_data.py
// ============================================================================

#[test]
fn test_calls_and_function_in_clean_data() {
    let extraction = extract_fixture("clean_data.py");
    let model = extraction.model();
    let root = get_program(model, "clean_data");

    assert_eq!(child_names(model, root), ["normalize", "read_rows", "write_rows"]);
    assert!(get_program(model, "read_rows").is_invocation());
    assert!(get_program(model, "normalize").is_function());
    assert_eq!(
        channel_links(model, "clean_data"),
        [("rows", "read_rows", "write_rows")]
    );

    // unmatched child ports become the workflow interface
    assert_eq!(bindings(model, &root.in_ports), ["value", "raw"]);
    assert_eq!(bindings(model, &root.out_ports), ["normalized", "cleaned_table"]);

    let cleaned = model.out_ports(root.id).last().unwrap();
    assert_eq!(cleaned.name.as_str(), "cleaned");
    assert_eq!(cleaned.uri.as_deref(), Some("file:cleaned.csv"));

    let data: Vec<_> = model.data_in(root.id).map(|d| d.name.as_str()).collect();
    assert_eq!(data, ["rows", "value", "raw", "normalized", "cleaned_table"]);
}

// ============================================================================
// create_demo.py
// ============================================================================

#[rstest]
#[case(None, "standardize_with_mask")]
#[case(Some("simple_diagnose"), "simple_diagnose")]
#[case(Some("load_data"), "load_data")]
fn test_demo_root_selection(#[case] workflow: Option<&str>, #[case] expected: &str) {
    let mut config = PipelineConfig::default();
    if let Some(name) = workflow {
        config.model = ModelerConfig::new().with_workflow(name);
    }
    let extraction = extract_fixture_with("create_demo.py", &config);
    assert_eq!(extraction.model().root().unwrap().name.as_str(), expected);
}

#[test]
fn test_demo_uppercase_markup() {
    let extraction = extract_fixture("create_demo.py");
    let model = extraction.model();

    let top: Vec<_> = model.top_level().map(|p| p.name.as_str()).collect();
    assert_eq!(top, ["standardize_with_mask", "simple_diagnose", "load_data"]);
    assert!(model.channels().is_empty());
    assert!(get_program(model, "load_data").is_synthesized());

    let pdf = model
        .out_ports(get_program(model, "simple_diagnose").id)
        .next()
        .unwrap();
    assert_eq!(pdf.binding.as_str(), "result_NEE_pdf");
    assert_eq!(pdf.uri.as_deref(), Some("file:result_NEE.pdf"));
    assert_eq!(
        extraction.annotations().get(pdf.annotation).unwrap().keyword.as_str(),
        "@OUT"
    );
}

// ============================================================================
// Several sources in one run
// ============================================================================

#[test]
fn test_sources_are_processed_in_source_order() {
    let (sources, mut comments) = comments_of(&["clean_data.py", "create_demo.py"]);
    comments.reverse();

    let extraction = run(comments, &PipelineConfig::default()).unwrap();
    let model = extraction.model();

    let top: Vec<_> = model.top_level().map(|p| p.name.as_str()).collect();
    assert_eq!(
        top,
        ["clean_data", "standardize_with_mask", "simple_diagnose", "load_data"]
    );
    assert_eq!(model.root().unwrap().name.as_str(), "clean_data");

    let first = extraction.annotations().all().first().unwrap();
    assert_eq!(first.source(), Some(SourceId::new(0)));
    assert_eq!(sources.path(SourceId::new(1)), Some("create_demo.py"));
}
