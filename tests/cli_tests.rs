// Integration tests for the simple-linreg binary
//
// Exercises the demo sample, CSV input, output formats, precision handling
// and error reporting end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn slr_cmd() -> Command {
    Command::cargo_bin("simple-linreg").unwrap()
}

// ============================================================================
// Demo Sample Tests
// ============================================================================

#[test]
fn test_demo_text_output() {
    slr_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Predictions:"))
        .stdout(predicate::str::contains("x = 700 -> 23.157"))
        .stdout(predicate::str::contains("x = 850 -> 29.412"))
        .stdout(predicate::str::contains("x = 1200 -> 44.007"))
        .stdout(predicate::str::contains("(Intercept)"))
        .stdout(predicate::str::contains("on 7 degrees of freedom"))
        .stdout(predicate::str::contains("Multiple R-squared: 0.98"));
}

#[test]
fn test_demo_json_output() {
    let output = slr_cmd().arg("--format").arg("json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sample_size"], 9);
    assert_eq!(value["precision"], 2);
    assert_eq!(value["predictions"].as_array().unwrap().len(), 3);
    assert_eq!(value["model_metrics"]["r_2"], 0.98);
    assert_eq!(value["model_metrics"]["adj_r_2"], 0.97);
    assert_eq!(value["model_metrics"]["rse"], 2.19);
    assert_eq!(value["coefficient_metrics"]["intercept"]["estimate"], -6.03);
    assert_eq!(value["coefficient_metrics"]["coefficient"]["t_statistic"], 17.13);
}

#[test]
fn test_custom_predictions() {
    slr_cmd()
        .arg("-p")
        .arg("1000")
        .assert()
        .success()
        .stdout(predicate::str::contains("x = 1000 -> 35.667"))
        .stdout(predicate::str::contains("x = 700").not());
}

#[test]
fn test_precision_flag() {
    slr_cmd()
        .arg("--precision")
        .arg("4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple R-squared: 0.9767"));
}

// ============================================================================
// Input File Tests
// ============================================================================

#[test]
fn test_csv_input() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("line.csv");
    fs::write(&input, "x,y\n1,2\n2,4\n3,5\n4,4\n5,5\n").unwrap();

    slr_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-p")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::contains("x = 6 -> 5.800"))
        .stdout(predicate::str::contains("Observations: 5"))
        .stdout(predicate::str::contains("Multiple R-squared: 0.60"));
}

#[test]
fn test_config_file() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("fit.toml");
    fs::write(&config, "precision = 3\n").unwrap();

    slr_cmd()
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple R-squared: 0.977"));
}

// ============================================================================
// Error Reporting Tests
// ============================================================================

#[test]
fn test_constant_predictor_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("flat.csv");
    fs::write(&input, "5,1\n5,2\n5,3\n5,4\n").unwrap();

    slr_cmd()
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fit regression"))
        .stderr(predicate::str::contains("All x values are identical"));
}

#[test]
fn test_too_few_samples_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("short.csv");
    fs::write(&input, "1,2\n2,4\n").unwrap();

    slr_cmd()
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("need at least 3 samples, got 2"));
}

#[test]
fn test_malformed_csv_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("bad.csv");
    fs::write(&input, "1,2\n2,abc\n3,6\n").unwrap();

    slr_cmd()
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2: invalid number 'abc'"));
}

#[test]
fn test_missing_input_file_fails() {
    slr_cmd()
        .arg("-i")
        .arg("/nonexistent/sample.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load sample"));
}

#[test]
fn test_invalid_precision_fails() {
    slr_cmd()
        .arg("--precision")
        .arg("20")
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision must be <= 12"));
}

#[test]
fn test_invalid_predict_values_fail() {
    slr_cmd()
        .arg("-p")
        .arg("1,x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --predict values"))
        .stderr(predicate::str::contains("Invalid value 'x' at position 2"))
        .stderr(predicate::str::contains("Line 1").not());
}

#[test]
fn test_perfect_fit_json_keeps_non_finite_statistics() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("exact.csv");
    fs::write(&input, "1,2\n2,4\n3,6\n4,8\n5,10\n").unwrap();

    let output = slr_cmd()
        .arg("-i")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["coefficient_metrics"]["coefficient"]["t_statistic"], "inf");
    assert_eq!(value["coefficient_metrics"]["intercept"]["t_statistic"], "NaN");
    assert_eq!(value["model_metrics"]["r_2"], 1.0);
}
