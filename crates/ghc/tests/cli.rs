#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::{fs, process::Command};

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use tempfile::tempdir;

const AUBURN: &str = "-85.59,32.51,-85.41,32.69";

#[allow(deprecated)]
fn ghc(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("ghc").expect("binary exists");
    cmd.args(args);
    cmd.assert()
}

fn stdout_of(assert: Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

#[test]
fn index_fixture() {
    let out = stdout_of(
        ghc(&["index", "--bounds", "-4,-4,4,4", "--order", "3", "--orientation", "left-top", "-1", "-4"])
            .success(),
    );
    assert_eq!(out, "49\n");
}

#[test]
fn geo_reference_point() {
    let out = stdout_of(ghc(&["geo", "--bounds", AUBURN, "32.608915", "-85.481880"]).success());
    assert_eq!(out, "13595\n");
}

#[test]
fn geo_rejects_bad_latitude() {
    ghc(&["geo", "--bounds", AUBURN, "95", "-85.48"]).failure();
}

#[test]
fn index_outside_bounds_fails() {
    ghc(&["index", "--bounds", "0,0,1,1", "2", "0.5"]).failure();
}

#[test]
fn order_zero_is_rejected() {
    ghc(&["index", "--order", "0", "0", "0"]).failure();
}

#[test]
fn unknown_orientation_is_rejected() {
    ghc(&["index", "--orientation", "north", "0", "0"]).failure();
}

#[test]
fn quadrant_tie_goes_lower_left() {
    let out = stdout_of(ghc(&["quadrant", "--bounds", "0,0,10,10", "5", "5"]).success());
    assert_eq!(out, "1 LowerLeft\n");
}

#[test]
fn kml_coordinates_to_stdout() {
    let out = stdout_of(
        ghc(&["kml", "--bounds", "0,0,4,4", "--order", "1", "--coordinates-only"]).success(),
    );
    assert_eq!(out, "1,3,0 1,1,0 3,1,0 3,3,0\n");
}

#[test]
fn kml_document_to_file() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("curve.kml");
    ghc(&[
        "kml",
        "--bounds",
        AUBURN,
        "--order",
        "3",
        "--name",
        "Auburn",
        output.to_str().expect("utf8 path"),
    ])
    .success();

    let doc = fs::read_to_string(&output).expect("kml written");
    assert!(doc.contains("<name>Auburn</name>"));
    let coords = doc
        .split("<coordinates>")
        .nth(1)
        .and_then(|rest| rest.split("</coordinates>").next())
        .expect("coordinates element");
    assert_eq!(coords.split(' ').count(), 64);
}

#[test]
fn demo_prints_reference_indices() {
    let out = stdout_of(ghc(&["demo"]).success());
    let indices: Vec<&str> = out
        .lines()
        .map(|l| l.rsplit(": ").next().expect("index"))
        .collect();
    assert_eq!(indices, ["49", "13595", "13592", "13591", "13593", "7493"]);
}

#[test]
fn kml_rejects_orders_too_large_to_export() {
    for order in ["13", "32"] {
        let assert = ghc(&["kml", "--order", order, "--coordinates-only"]).code(1);
        let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
        assert!(stderr.contains("supports orders up to 12"), "{stderr}");
    }
}

#[test]
fn kml_large_order_streams_to_file() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("big.kml");
    ghc(&[
        "kml",
        "--order",
        "8",
        "--coordinates-only",
        output.to_str().expect("utf8 path"),
    ])
    .success();
    let body = fs::read_to_string(&output).expect("kml written");
    assert_eq!(body.trim_end().split(' ').count(), 1 << 16);
}
