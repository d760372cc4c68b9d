use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn closet(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("closet").unwrap();
    cmd.env("CLOSET_HOME", home).env_remove("RUST_LOG");
    cmd
}

const CREATE_PANTS: &str = "1\n1\nred\n40\nM\ntrue\n";

#[test]
fn exit_saves_snapshot() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .write_stdin(format!("{}99\n", CREATE_PANTS))
        .assert()
        .success()
        .stdout(predicate::str::contains("Clothes created: Pants{"))
        .stdout(predicate::str::contains("Saved 1 clothes"));

    let snapshot = std::fs::read_to_string(temp_dir.path().join("closet.json")).unwrap();
    assert!(snapshot.contains("\"saved_at\""));
    assert!(snapshot.contains("\"color\": \"red\""));
    assert!(snapshot.contains("\"has_pockets\": true"));
}

#[test]
fn closed_input_does_not_save() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .write_stdin(CREATE_PANTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("changes were not saved"));

    assert!(!temp_dir.path().join("closet.json").exists());
}

#[test]
fn saved_clothes_survive_restart() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .write_stdin(format!("{}99\n", CREATE_PANTS))
        .assert()
        .success();

    closet(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("american size"))
        .stdout(predicate::str::contains("PANTS"))
        .stdout(predicate::str::contains("red"));

    // Search by color in a fresh session sees the saved record.
    closet(temp_dir.path())
        .write_stdin("3\n2\nred\n99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results of your search"))
        .stdout(predicate::str::contains("PANTS"));
}

#[test]
fn list_on_empty_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No clothes found."));
}

#[test]
fn malformed_input_is_reported_and_recovered() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .write_stdin("abc\n7\n99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input: abc"))
        .stdout(predicate::str::contains("Wrong choice"));
}

#[test]
fn malformed_snapshot_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("closet.json"), "{ not json").unwrap();

    closet(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("malformed"))
        .stdout(predicate::str::contains("No clothes found."));
}

#[test]
fn config_round_trip_and_save_on_exit_off() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .args(["config", "save-on-exit", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save-on-exit set to false"));

    closet(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot-file = closet.json"))
        .stdout(predicate::str::contains("save-on-exit = false"));

    closet(temp_dir.path())
        .write_stdin(format!("{}99\n", CREATE_PANTS))
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing saved"));

    assert!(!temp_dir.path().join("closet.json").exists());
}

#[test]
fn config_unknown_key_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();

    closet(temp_dir.path())
        .args(["config", "colour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_dir = tempfile::tempdir().unwrap();
    let flag_dir = tempfile::tempdir().unwrap();

    closet(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .write_stdin(format!("{}99\n", CREATE_PANTS))
        .assert()
        .success();

    assert!(flag_dir.path().join("closet.json").exists());
    assert!(!env_dir.path().join("closet.json").exists());
}
