//! Test fixture loader for lexredact golden documents, vocabularies and pattern sets.
//!
//! Provides typed deserialization of the golden JSON files and helper
//! functions for loading any fixture in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Deserialize the JSON file at `path`.
///
/// # Panics
/// Panics if the file can't be read or parsed.
fn load_json<T: DeserializeOwned>(path: &Path) -> T {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as text (documents, vocabularies, TOML).
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden redaction scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub document: String,
    pub candidates: Vec<CandidateFixture>,
    /// TOML applied on top of the default config.
    #[serde(default)]
    pub config: String,
    pub expected_output: String,
    /// Entity types of the final spans, in document order.
    #[serde(default)]
    pub expected_entities: Option<Vec<String>>,
}

/// A detector candidate as stored in fixtures (byte offsets).
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateFixture {
    pub start: usize,
    pub end: usize,
    pub entity_type: String,
    pub score: f64,
}

/// Load every golden case under `golden/redaction/`.
pub fn golden_redaction_cases() -> Vec<GoldenCase> {
    list_fixtures("golden/redaction")
        .iter()
        .map(|path| load_json(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn support_files_exist() {
        let files = [
            "patterns/br_legal.toml",
            "vocabularies/termos_legais.txt",
            "vocabularies/termos_comuns.txt",
            "documents/peticao_inss.txt",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_cases_parse_and_have_unique_ids() {
        let cases = golden_redaction_cases();
        assert!(cases.len() >= 7, "expected 7+ golden cases, got {}", cases.len());
        let mut ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cases.len());
    }
}
