//! Annotated script fixtures under `tests/fixtures`.

use std::path::{Path, PathBuf};

use ywmarkup::{Comment, Extraction, PipelineConfig, SourceMap, run};

use super::comment_scanner::scan_hash_comments;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Every `.py` fixture, sorted by file name.
pub fn all_fixtures() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(fixtures_dir())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "py"))
        .collect();
    paths.sort();
    paths
}

pub fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Scan the named fixtures as one run, registering each as a source.
pub fn comments_of(names: &[&str]) -> (SourceMap, Vec<Comment>) {
    let mut sources = SourceMap::new();
    let mut comments = Vec::new();
    for name in names {
        let id = sources.insert(name);
        comments.extend(scan_hash_comments(Some(id), &read_fixture(name)));
    }
    (sources, comments)
}

pub fn extract_fixture(name: &str) -> Extraction {
    extract_fixture_with(name, &PipelineConfig::default())
}

pub fn extract_fixture_with(name: &str, config: &PipelineConfig) -> Extraction {
    let (_, comments) = comments_of(&[name]);
    run(comments, config).unwrap_or_else(|e| panic!("Failed to extract {}: {}", name, e))
}
