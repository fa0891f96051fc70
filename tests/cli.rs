use std::fs;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn glide_range() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_listing() {
    glide_range()
        .arg(data("sterling.cup"))
        .assert()
        .success()
        .stdout(
            "42.450000 -71.833333 12840.0 outlanding \"Hayfield North 394 ft\"\n\
             42.106667 -71.510000 13600.2 grass \"Hopedale 269 ft\"\n\
             42.426000 -71.793000 12441.9 airport \"Sterling 459 ft\"\n\
             42.555000 -71.759000 13118.6 airport \"Fitchburg 348 ft\"\n",
        )
        .stderr(predicate::str::contains("Loaded 4 waypoints (1 skipped)"))
        .stderr(predicate::str::contains("Skipping line 7"));
}

#[test]
fn test_parameters_and_toggles() {
    glide_range()
        .arg(data("sterling.cup"))
        .args(&["-g", "30", "-a", "5000", "-r", "1000", "--hide-airports", "--hide-grass"])
        .assert()
        .success()
        .stdout("42.450000 -71.833333 32976.0 outlanding \"Hayfield North 394 ft\"\n");
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("footprints.txt");

    glide_range()
        .arg(data("sterling.cup"))
        .arg("-o")
        .arg(&out)
        .arg("--hide-outlanding")
        .assert()
        .success()
        .stdout("");

    let listing = fs::read_to_string(&out).unwrap();
    assert_eq!(listing.lines().count(), 3);
    assert!(listing.starts_with("42.106667 -71.510000"));
}

#[test]
fn test_invalid_parameters() {
    glide_range()
        .arg(data("sterling.cup"))
        .args(&["-a", "1000", "-r", "1000"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "ERROR: Arrival height must be less than altitude",
        ));

    glide_range()
        .arg(data("sterling.cup"))
        .args(&["-g", "150"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Glide ratio"));
}

#[test]
fn test_load_failures() {
    glide_range()
        .arg(data("broken.cup"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: No valid waypoints found in file (2 rejected)",
        ));

    glide_range()
        .arg(data("empty.cup"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: No waypoints found in file"));

    glide_range()
        .arg(data("waypoints.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a CUP file"));

    glide_range()
        .arg(data("missing.cup"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}
