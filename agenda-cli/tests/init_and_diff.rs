use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn agenda_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agenda"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_scaffolds_config_and_sample_data() {
    let dir = TempDir::new().expect("dir");
    agenda_cmd(dir.path())
        .args(["init", "client-a"])
        .assert()
        .success()
        .stdout(contains("created").and(contains("agenda.yaml")));

    let root = dir.path().join("client-a");
    let yaml = fs::read_to_string(root.join("agenda.yaml")).expect("config");
    assert!(yaml.contains("data: data.json"));
    assert!(yaml.contains("bar_scale: percentage"));
    assert!(!yaml.contains("base_dir"));
    assert!(root.join("data.json").exists());

    agenda_cmd(&root).arg("render").assert().success();
    assert!(root.join("agenda.html").exists());
}

#[test]
fn init_never_overwrites() {
    let dir = TempDir::new().expect("dir");
    fs::write(dir.path().join("data.json"), "{\"mine\": true}").unwrap();

    agenda_cmd(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("exists, skipped"));

    assert_eq!(
        fs::read_to_string(dir.path().join("data.json")).unwrap(),
        "{\"mine\": true}"
    );
    assert!(dir.path().join("agenda.yaml").exists());
}

#[test]
fn diff_is_empty_after_render_and_shows_data_changes() {
    let dir = TempDir::new().expect("dir");
    agenda_cmd(dir.path()).arg("init").assert().success();
    agenda_cmd(dir.path()).arg("render").assert().success();

    agenda_cmd(dir.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("No differences"));

    let data = dir.path().join("data.json");
    let edited = fs::read_to_string(&data)
        .unwrap()
        .replace("Harbor & Finch Family Trust", "Osprey Holdings");
    fs::write(&data, edited).unwrap();

    agenda_cmd(dir.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(
            contains("--- a/agenda.html")
                .and(contains("+++ b/agenda.html"))
                .and(contains("Osprey Holdings")),
        );

    let html = fs::read_to_string(dir.path().join("agenda.html")).unwrap();
    assert!(html.contains("Harbor &amp; Finch Family Trust"), "diff must not write");
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = TempDir::new().expect("dir");
    agenda_cmd(dir.path()).arg("init").assert().success();
    agenda_cmd(dir.path())
        .args(["-v", "render"])
        .assert()
        .success()
        .stderr(contains("DEBUG"));
}
