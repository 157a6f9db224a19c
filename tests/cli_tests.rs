use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Home directory with a visible `tv` folder to process
fn create_home() -> (TempDir, std::path::PathBuf) {
    let home = tempdir().unwrap();
    let tv = home.path().join("tv");
    std::fs::create_dir(&tv).unwrap();
    (home, tv)
}

fn showfold(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("showfold").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("showfold")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize TV show"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("showfold")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_path() {
    let (home, _tv) = create_home();

    showfold(home.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn test_nonexistent_directory() {
    let (home, tv) = create_home();

    showfold(home.path())
        .args(["--path", tv.join("missing").to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_path_outside_home() {
    let (home, _tv) = create_home();
    let elsewhere = tempdir().unwrap();

    showfold(home.path())
        .args(["--path", elsewhere.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("inside your home directory"));
}

#[test]
fn test_hidden_path_rejected() {
    let (home, _tv) = create_home();
    let hidden = home.path().join(".shows");
    std::fs::create_dir(&hidden).unwrap();

    showfold(home.path())
        .args(["--path", hidden.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("hidden folder"));
}

#[test]
fn test_renames_nested_tree() {
    let (home, tv) = create_home();
    std::fs::create_dir_all(
        tv.join("Marvel Agents of S.H.I.E.L.D. Season 4")
            .join("Marvel.Agents.of.S.H.I.E.L.D.S04E15.XD.Garbage.Junk-StupidStuff"),
    )
    .unwrap();
    std::fs::create_dir_all(tv.join("Lost.S01E05.720p/Lost.S01E06")).unwrap();

    showfold(home.path())
        .args(["--path", tv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully renamed 3 directories"))
        .stderr(predicate::str::contains("Main folder:"));

    assert!(tv
        .join("Marvel Agents of S.H.I.E.L.D. Season 4")
        .join("Marvel Agents of S.H.I.E.L.D. Season 4 Episode 15")
        .is_dir());
    assert!(tv
        .join("Lost Season 1 Episode 5/Lost Season 1 Episode 6")
        .is_dir());
}

#[test]
fn test_second_run_has_nothing_to_do() {
    let (home, tv) = create_home();
    std::fs::create_dir_all(tv.join("Show.s02e03.HDTV")).unwrap();

    showfold(home.path())
        .args(["--path", tv.to_str().unwrap()])
        .assert()
        .success();

    showfold(home.path())
        .args(["--path", tv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No directories to rename"));

    assert!(tv.join("Show Season 2 Episode 3").is_dir());
}

#[test]
fn test_dry_flag_no_filesystem_changes() {
    let (home, tv) = create_home();
    std::fs::create_dir(tv.join("Show.S01E02")).unwrap();

    showfold(home.path())
        .args(["--dry", "--path", tv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("Show Season 1 Episode 2"));

    assert!(tv.join("Show.S01E02").exists());
}

#[test]
fn test_rename_failure_keeps_exit_status() {
    let (home, tv) = create_home();
    std::fs::create_dir(tv.join("Show.S01E02")).unwrap();
    std::fs::create_dir(tv.join("Show Season 1 Episode 2")).unwrap();

    showfold(home.path())
        .args(["--path", tv.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unable to rename directory"))
        .stdout(predicate::str::contains("1 renames failed"));
}

#[test]
fn test_splits_flag_logs_tokens() {
    let (home, tv) = create_home();
    std::fs::create_dir(tv.join("Marvel.Agents.of.S.H.I.E.L.D.S04E15")).unwrap();

    showfold(home.path())
        .args(["--splits", "--dry", "--path", tv.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("S.H.I.E.L.D."));
}
