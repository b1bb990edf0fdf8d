use assert_cmd::Command;
use chrono::{DateTime, Datelike, Local, TimeZone};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tempfile::tempdir;

fn scooter() -> Command {
    let mut cmd = Command::cargo_bin("scooter").unwrap();
    cmd.env_remove("SCOOTER_DIR")
        .env_remove("SCOOTER_DRY_RUN")
        .env_remove("SCOOTER_EXCLUDE_DIRS")
        .env_remove("SCOOTER_VERBOSE")
        .env_remove("SCOOTER_DATE_SOURCE")
        .env_remove("SCOOTER_MANIFEST")
        .env("NO_COLOR", "1")
        .env("SCOOTER_DATE_SOURCE", "modified");
    cmd
}

fn write_dated(path: &Path, year: i32, month: u32) {
    fs::write(path, "content").unwrap();
    let date = Local.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap();
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::from(date))
        .unwrap();
}

fn bucket_of(path: &Path) -> String {
    let modified = fs::metadata(path).unwrap().modified().unwrap();
    let date = DateTime::<Local>::from(modified);
    format!("{}/{:02}", date.year(), date.month())
}

fn names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_flag() {
    scooter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scoot files around by date and kind"))
        .stdout(predicate::str::contains("--exclude-dirs"));
}

#[test]
fn test_version_flag() {
    scooter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument() {
    scooter()
        .arg("--bogus")
        .assert()
        .code(2) // ExitCode::InvalidArguments
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_nonexistent_directory() {
    scooter()
        .args(["--dir", "/nonexistent/path"])
        .assert()
        .code(3) // ExitCode::DirectoryNotFound
        .stderr(predicate::str::contains("Error: Target directory not found"));
}

#[test]
fn test_file_instead_of_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    fs::write(&file_path, "content").unwrap();

    scooter()
        .args(["--dir", file_path.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_dry_run_prints_csv_and_changes_nothing() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("b.txt"), 2020, 1);
    write_dated(&dir.path().join("a.txt"), 2019, 12);
    fs::write(dir.path().join(".DS_Store"), "").unwrap();
    let before = names(dir.path());

    let output = scooter()
        .args(["--dry-run", "--exclude-dirs", "--dir", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(names(dir.path()), before);

    let base = dir.path().canonicalize().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec![
            "old,new".to_string(),
            format!(
                "{},{}",
                base.join("a.txt").display(),
                base.join("2019/12/doc/a.txt").display()
            ),
            format!(
                "{},{}",
                base.join("b.txt").display(),
                base.join("2020/01/doc/b.txt").display()
            ),
        ]
    );
}

#[test]
fn test_apply_moves_files_and_directories() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("photo.JPG"), 2022, 7);
    write_dated(&dir.path().join("tune.mp3"), 2021, 4);
    fs::create_dir(dir.path().join("Projects")).unwrap();
    let projects_bucket = bucket_of(&dir.path().join("Projects"));

    scooter()
        .args(["--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 3 entries."))
        .stderr(predicate::str::contains("photo.JPG -> 2022/07/image/photo.JPG"));

    assert!(dir.path().join("2022/07/image/photo.JPG").exists());
    assert!(dir.path().join("2021/04/audio/tune.mp3").exists());
    assert!(dir
        .path()
        .join(&projects_bucket)
        .join("Projects")
        .is_dir());
    assert!(!dir.path().join("photo.JPG").exists());
}

#[test]
fn test_exclude_dirs_leaves_directories() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("data.csv"), 2020, 5);
    fs::create_dir(dir.path().join("Keep")).unwrap();

    scooter()
        .args(["-x", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("Keep").is_dir());
    assert!(dir.path().join("2020/05/data/data.csv").exists());
}

#[test]
fn test_hidden_and_year_entries_are_never_moved() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("2021")).unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".DS_Store"), "").unwrap();

    scooter()
        .args(["--dry-run", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("old,new\n");
}

#[test]
fn test_second_pass_is_a_no_op() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("report.pdf"), 2023, 3);

    scooter()
        .args(["--exclude-dirs", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(names(dir.path()), vec!["2023"]);

    scooter()
        .args(["--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 0 entries."));

    assert_eq!(names(dir.path()), vec!["2023"]);
    assert!(dir.path().join("2023/03/doc/report.pdf").exists());
}

#[test]
fn test_environment_overrides() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("book.epub"), 2018, 9);

    scooter()
        .env("SCOOTER_DIR", dir.path())
        .env("SCOOTER_DRY_RUN", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("2018/09/book/book.epub"));

    assert!(dir.path().join("book.epub").exists());
}

#[test]
fn test_flag_wins_over_environment() {
    let dir = tempdir().unwrap();
    let other = tempdir().unwrap();
    write_dated(&dir.path().join("clip.mp4"), 2017, 2);

    scooter()
        .env("SCOOTER_DIR", other.path())
        .env("SCOOTER_DRY_RUN", "true")
        .args(["--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2017/02/video/clip.mp4"));
}

#[test]
fn test_manifest_records_moves() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    write_dated(&dir.path().join("style.css"), 2024, 1);
    let manifest_path = out.path().join("moves.json");

    scooter()
        .args([
            "--exclude-dirs",
            "--dir",
            dir.path().to_str().unwrap(),
            "--manifest",
            manifest_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Manifest saved to"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();

    assert_eq!(manifest["complete"], true);
    assert_eq!(manifest["moves"].as_array().unwrap().len(), 1);
    assert_eq!(manifest["moves"][0]["kind"], "file");
    assert!(manifest["moves"][0]["destination"]
        .as_str()
        .unwrap()
        .ends_with("2024/01/web/style.css"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("sheet.xlsx"), 2020, 10);

    scooter()
        .args(["--verbose", "--dry-run", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Batch planned"))
        .stdout(predicate::str::starts_with("old,new\n"));
}

#[test]
fn test_quiet_run_logs_nothing() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("sheet.xlsx"), 2020, 10);

    scooter()
        .args(["--dry-run", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_single_dash_long_flags() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("notes.md"), 2016, 6);

    scooter()
        .args(["-dir", dir.path().to_str().unwrap(), "-dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("old,new\n"))
        .stdout(predicate::str::contains("2016/06/doc/notes.md"));

    assert_eq!(names(dir.path()), vec!["notes.md"]);
}

#[test]
fn test_explicit_false_beats_environment() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("notes.md"), 2016, 6);

    scooter()
        .env("SCOOTER_DRY_RUN", "1")
        .args(["-dry-run=false", "-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 1 entry."));

    assert!(dir.path().join("2016/06/doc/notes.md").exists());
}

#[test]
fn test_exclude_dirs_from_environment() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("data.csv"), 2020, 5);
    fs::create_dir(dir.path().join("Keep")).unwrap();

    scooter()
        .env("SCOOTER_EXCLUDE_DIRS", "1")
        .args(["--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 1 entry."));

    assert!(dir.path().join("Keep").is_dir());
    assert!(dir.path().join("2020/05/data/data.csv").exists());
}

#[test]
fn test_verbose_from_environment() {
    let dir = tempdir().unwrap();
    write_dated(&dir.path().join("sheet.xlsx"), 2020, 10);

    scooter()
        .env("SCOOTER_VERBOSE", "1")
        .args(["--dry-run", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Batch planned"));
}
