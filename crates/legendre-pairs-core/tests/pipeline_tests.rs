//! End-to-end screening over real files on disk.
//!
//! Each test writes A and B sources into a temp dir, runs the full
//! load/sort/sweep/report pipeline and checks the rendered output.

use std::fs;
use std::path::PathBuf;

use legendre_pairs_core::{OutputFormat, ScreenConfig, ScreenError, Screening};
use tempfile::TempDir;

fn write_sources(dir: &TempDir, a: &str, b: &str) -> (PathBuf, PathBuf) {
    let a_path = dir.path().join("A.txt");
    let b_path = dir.path().join("B.txt");
    fs::write(&a_path, a).expect("Failed to write A");
    fs::write(&b_path, b).expect("Failed to write B");
    (a_path, b_path)
}

fn run(a: &str, b: &str, config: ScreenConfig) -> Result<String, ScreenError> {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (a_path, b_path) = write_sources(&dir, a, b);
    let screening = Screening::load(&a_path, &b_path, config)?;
    let mut out = Vec::new();
    screening.write_report(&mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

// =============================================================================
// Match scenarios
// =============================================================================

#[test]
fn test_two_complementary_pairs() {
    let out = run(
        "a1 -1,-1\na2 0,-2\n",
        "b1 -1,-1\nb2 -2,0\n",
        ScreenConfig::default(),
    )
    .expect("valid run");
    assert_eq!(
        out,
        "a1\t[ -1 -1 ]\nb1\t[ -1 -1 ]\n\na2\t[  0 -2 ]\nb2\t[ -2  0 ]\n\n"
    );
}

#[test]
fn test_no_complementary_pairs() {
    let out = run("a1 0,0\n", "b1 0,0\n", ScreenConfig::default()).expect("valid run");
    assert!(out.is_empty(), "expected no output, got {:?}", out);
}

#[test]
fn test_shared_key_expands_labels() {
    let out = run(
        "a1 -1,-1\n",
        "b1 -1,-1\nb2 -1,-1\n",
        ScreenConfig::default(),
    )
    .expect("valid run");
    assert_eq!(
        out,
        "a1\t[ -1 -1 ]\nb1\t[ -1 -1 ]\n\na1\t[ -1 -1 ]\nb2\t[ -1 -1 ]\n\n"
    );
}

#[test]
fn test_leading_zero_keys_merge_and_match() {
    let out = run("a1 -01,-1\n", "b1 -1,-1\n", ScreenConfig::default()).expect("valid run");
    assert!(out.starts_with("a1\t[ -1 -1 ]\nb1\t[ -1 -1 ]\n"));
}

#[test]
fn test_swapping_sources_reverses_roles() {
    let a = "a1 -1,0,-3\na2 1,-2,-2\na3 -2,-2,0\na4 4,4,4\n";
    let b = "b1 -1,-2,1\nb2 -3,0,0\nb3 0,0,-2\nb4 -9,-9,-9\n";
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (a_path, b_path) = write_sources(&dir, a, b);

    let forward = Screening::load(&a_path, &b_path, ScreenConfig::default()).expect("valid");
    let reverse = Screening::load(&b_path, &a_path, ScreenConfig::default()).expect("valid");

    let mut f: Vec<_> = forward
        .pairs()
        .expect("ok")
        .iter()
        .map(|p| (p.a.to_string(), p.b.to_string()))
        .collect();
    let mut r: Vec<_> = reverse
        .pairs()
        .expect("ok")
        .iter()
        .map(|p| (p.b.to_string(), p.a.to_string()))
        .collect();
    f.sort();
    r.sort();
    assert_eq!(f.len(), 3);
    assert_eq!(f, r);
}

#[test]
fn test_repeated_runs_identical() {
    let a = "x3 0,-2\nx1 -1,-1\nx2 -1,-1\n";
    let b = "y2 -2,0\ny1 -1,-1\n";
    let first = run(a, b, ScreenConfig::default()).expect("valid run");
    let second = run(a, b, ScreenConfig::default()).expect("valid run");
    assert_eq!(first, second);
}

#[test]
fn test_json_output() {
    let out = run(
        "a1 -1,-1\n",
        "b1 -1,-1\n",
        ScreenConfig::default().format(OutputFormat::Json),
    )
    .expect("valid run");
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(json[0]["a_label"], "a1");
    assert_eq!(json[0]["b_vector"], serde_json::json!([-1, -1]));
}

// =============================================================================
// Fatal input errors
// =============================================================================

#[test]
fn test_malformed_line_in_b_aborts() {
    let err = run("a1 -1,-1\n", "b1 -1,-1\nonlylabel\n", ScreenConfig::default())
        .expect_err("B line 2 malformed");
    assert!(matches!(err, ScreenError::MalformedLine { line: 2, .. }));
}

#[test]
fn test_malformed_integer_aborts() {
    let err = run("a1 -1,one\n", "b1 -1,-1\n", ScreenConfig::default())
        .expect_err("bad integer");
    match err {
        ScreenError::MalformedInteger {
            source_name,
            line,
            token,
        } => {
            assert!(source_name.ends_with("A.txt"));
            assert_eq!(line, 1);
            assert_eq!(token, "one");
        }
        other => panic!("Expected MalformedInteger, got {:?}", other),
    }
}

#[test]
fn test_missing_source_aborts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (a_path, _) = write_sources(&dir, "a1 -1,-1\n", "b1 -1,-1\n");
    let err = Screening::load(&a_path, dir.path().join("missing.txt"), ScreenConfig::default())
        .expect_err("missing B");
    assert!(matches!(err, ScreenError::SourceUnreadable { .. }));
}

#[test]
fn test_cross_source_dimension_mismatch() {
    let err = run("a1 -1,-1\n", "b1 -1,-1,-1\n", ScreenConfig::default())
        .expect_err("dimensions differ");
    assert!(matches!(
        err,
        ScreenError::DimensionMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
}
