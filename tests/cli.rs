use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn floodmap_cmd() -> Command {
    Command::cargo_bin("floodmap-draw").expect("binary exists")
}

/// Keyboard script that draws and finishes a 30x30 right triangle.
const TRIANGLE_SCRIPT: &str = "\
start
confirm
key Right
key Right
key Right
confirm
key Up
key Up
key Up
confirm
finish
";

fn write_script(temp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join("session.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_prints_about_line() {
    floodmap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Polygon drawing subsystem for the flood warning map",
        ));
}

#[test]
fn no_script_prints_usage() {
    let temp = TempDir::new().unwrap();
    floodmap_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--script FILE"))
        .stdout(predicate::str::contains("Script commands:"));
}

#[test]
fn replayed_script_reports_finished_ring() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TRIANGLE_SCRIPT);

    floodmap_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--centre", "0,0", "--zoom", "8"])
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("phase: Editing"))
        .stdout(predicate::str::contains("mode: Keyboard"))
        .stdout(predicate::str::contains("centre: (30.0000, 30.0000)"))
        .stdout(predicate::str::contains(
            "ring: (0.0000, 0.0000) (30.0000, 0.0000) (30.0000, 30.0000) (0.0000, 0.0000)",
        ));
}

#[test]
fn json_flag_emits_geojson_polygon() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TRIANGLE_SCRIPT);

    floodmap_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--centre", "0,0", "--zoom", "8"])
        .arg("--script")
        .arg(&script)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Polygon\""));
}

#[test]
fn unfinished_sketch_reports_no_ring() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "start\nconfirm\nkey Right\nconfirm\n");

    floodmap_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--centre", "0,0"])
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("phase: Drawing"))
        .stdout(predicate::str::contains("ring: none"));
}

#[test]
fn bad_script_line_is_rejected_with_its_line_number() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "start\nfrobnicate\n");

    floodmap_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command"));
}

#[test]
fn bad_centre_argument_is_rejected() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "start\n");

    floodmap_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--centre", "not-a-coord"])
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad --centre"));
}

#[test]
fn config_file_overrides_pan_step() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "[ui]\npan_step_px = 20.0\n").unwrap();
    // One Right step now covers 20 px
    let script = write_script(&temp, "start\nconfirm\nkey Right\nconfirm\nkey Up\nconfirm\nfinish\n");

    floodmap_cmd()
        .args(["--centre", "0,0", "--zoom", "8"])
        .arg("--config")
        .arg(&config_path)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("(20.0000, 0.0000)"));
}
