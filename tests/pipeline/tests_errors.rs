//! Markup errors surfaced by whole runs

use rstest::rstest;
use ywmarkup::{Comment, ErrorCode, PipelineConfig, SourceId, run};

fn run_lines(lines: &[&str]) -> ywmarkup::Result<ywmarkup::Extraction> {
    let source = Some(SourceId::new(0));
    let comments = lines
        .iter()
        .enumerate()
        .map(|(i, text)| Comment::new(source, i as u32 + 1, 1, *text));
    run(comments, &PipelineConfig::default())
}

#[rstest]
#[case(&["@begin a", "@outt y", "@end a"], ErrorCode::E0101, 2)]
#[case(&["@begin a", "@in", "@end a"], ErrorCode::E0102, 2)]
#[case(&["@as alias", "@begin a", "@end a"], ErrorCode::E0103, 1)]
#[case(&["@begin a", "@end a", "@end a"], ErrorCode::E0201, 3)]
#[case(&["@begin a", "@begin b", "@end a"], ErrorCode::E0202, 3)]
#[case(&["@begin a", "@begin b"], ErrorCode::E0203, 2)]
#[case(&["@call f", "@begin a", "@end a"], ErrorCode::E0204, 1)]
#[case(&["@begin a", "@out y", "@return y", "@end a"], ErrorCode::E0301, 3)]
fn test_error_code_and_line(
    #[case] lines: &[&str],
    #[case] code: ErrorCode,
    #[case] line: u32,
) {
    let err = run_lines(lines).unwrap_err();
    assert_eq!(err.code(), code, "unexpected error: {}", err);
    assert_eq!(err.location().line, line);
    assert_eq!(err.location().source, Some(SourceId::new(0)));
}

#[test]
fn test_error_messages() {
    let err = run_lines(&["@begin a", "@begin b", "@end a"]).unwrap_err();
    assert_eq!(
        err.format(),
        "E0202: source#0:3: @end a does not match @begin b at source#0:2"
    );

    let err = run_lines(&["@begin a", "@in x", "@in x", "@end a"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "source#0:3: input 'x' is declared twice in a"
    );
}

#[test]
fn test_no_partial_model_on_error() {
    let result = run_lines(&["@begin a", "@in x", "@out y", "@end a", "@begin b"]);
    assert!(result.is_err());
}
