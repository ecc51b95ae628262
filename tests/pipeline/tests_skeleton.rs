//! Skeleton rendering over the fixtures

use ywmarkup::{PipelineConfig, run};

use crate::helpers::comment_scanner::scan_hash_comments;
use crate::helpers::source_fixtures::{all_fixtures, extract_fixture};

#[test]
fn test_skeleton_rebuilds_the_same_model() {
    for path in all_fixtures() {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap();
        let extraction = extract_fixture(name);

        let skeleton = extraction.skeleton("#");
        let rescanned = run(scan_hash_comments(None, &skeleton), &PipelineConfig::default())
            .unwrap_or_else(|e| panic!("skeleton of {} does not parse: {}\n{}", name, e, skeleton));

        assert_eq!(
            rescanned.model(),
            extraction.model(),
            "skeleton of {} changes the model",
            name
        );
    }
}

#[test]
fn test_clean_data_skeleton() {
    let extraction = extract_fixture("clean_data.py");
    let expected = r#"# @begin clean_data
    #
    # @begin normalize
        #
        # @param value
        # @return normalized "trimmed text"
        #
    # @end normalize
    # @in raw @uri file:raw.csv
    # @out rows
    # @call read_rows
    # @in rows
    # @out cleaned @as cleaned_table @file cleaned.csv
    # @call write_rows
    #
# @end clean_data
"#;
    assert_eq!(extraction.skeleton("#"), expected);
}

#[test]
fn test_comment_listing_has_one_line_per_comment() {
    let extraction = extract_fixture("create_demo.py");
    let listing = extraction.comment_listing();
    assert_eq!(listing.lines().count(), extraction.comments().len());
    assert!(listing.lines().any(|l| l == "@BEGIN simple_diagnose"));
}
