use predicates::str::contains;
use std::fs;

mod common;
use common::{init_cli_db, rwk, setup_test_db, temp_out};

fn with_project(name: &str) -> String {
    let db = setup_test_db(name);
    init_cli_db(name, &db);
    rwk(name)
        .args(["--db", &db, "project", "add", "android"])
        .assert()
        .success()
        .stdout(contains("Project 'android' created"));
    db
}

fn worked_day(name: &str, db: &str) {
    rwk(name)
        .args(["--db", db, "in", "android", "--at", "2024-05-13 09:00"])
        .assert()
        .success()
        .stdout(contains("Clocked in to 'android' at 09:00"));
    rwk(name)
        .args(["--db", db, "out", "android", "--at", "2024-05-13 17:07"])
        .assert()
        .success()
        .stdout(contains("Clocked out of 'android' at 17:07"));
}

#[test]
fn init_creates_database() {
    let name = "cli_init";
    let db = setup_test_db(name);
    rwk(name)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
    assert!(fs::metadata(&db).is_ok());
}

#[test]
fn projects_are_listed_and_removed() {
    let name = "cli_projects";
    let db = with_project(name);

    rwk(name)
        .args(["--db", &db, "project", "list"])
        .assert()
        .success()
        .stdout(contains("android"));

    rwk(name)
        .args(["--db", &db, "project", "add", "android"])
        .assert()
        .failure()
        .stderr(contains("Error: Project already exists: android"));

    rwk(name)
        .args(["--db", &db, "project", "remove", "android", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been removed"));

    rwk(name)
        .args(["--db", &db, "project", "list"])
        .assert()
        .success()
        .stdout(contains("No projects yet"));
}

#[test]
fn report_shows_day_with_difference() {
    let name = "cli_report";
    let db = with_project(name);
    worked_day(name, &db);

    rwk(name)
        .args(["--db", &db, "report", "android"])
        .assert()
        .success()
        .stdout(contains("Week 20, 2024 (2024-05-13)"))
        .stdout(contains("8:07 (+0:07)"))
        .stdout(contains("09:00 - 17:07"));

    rwk(name)
        .args(["--db", &db, "report", "android", "--format", "fraction"])
        .assert()
        .success()
        .stdout(contains("8.12 (+0.12)"));
}

#[test]
fn clock_errors_are_reported() {
    let name = "cli_clock_errors";
    let db = with_project(name);

    rwk(name)
        .args(["--db", &db, "out", "android"])
        .assert()
        .failure()
        .stderr(contains("Error: Project 'android' is not clocked in"));

    rwk(name)
        .args(["--db", &db, "in", "missing"])
        .assert()
        .failure()
        .stderr(contains("Error: Project not found: missing"));

    rwk(name)
        .args(["--db", &db, "in", "android", "--at", "2024-05-13 09:00"])
        .assert()
        .success();

    rwk(name)
        .args(["--db", &db, "in", "android"])
        .assert()
        .failure()
        .stderr(contains("already clocked in"));

    rwk(name)
        .args(["--db", &db, "out", "android", "--at", "2024-05-13 08:00"])
        .assert()
        .failure()
        .stderr(contains("is before clock in"));

    rwk(name)
        .args(["--db", &db, "out", "android", "--at", "2024-05-15 09:00"])
        .assert()
        .failure()
        .stderr(contains("exceeds the allowed 24 hours"));
}

#[test]
fn status_lists_active_projects() {
    let name = "cli_status";
    let db = with_project(name);

    rwk(name)
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("Not clocked in to any project"));

    rwk(name)
        .args(["--db", &db, "toggle", "android"])
        .assert()
        .success()
        .stdout(contains("Clocked in to 'android'"));

    rwk(name)
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("android: clocked in since"));

    rwk(name)
        .args(["--db", &db, "toggle", "android", "--yes"])
        .assert()
        .success()
        .stdout(contains("Clocked out of 'android'"));
}

#[test]
fn register_toggles_day() {
    let name = "cli_register";
    let db = with_project(name);
    worked_day(name, &db);

    rwk(name)
        .args(["--db", &db, "register", "android", "--date", "2024-05-13"])
        .assert()
        .success()
        .stdout(contains("Registered 1 time interval(s)"));

    rwk(name)
        .args(["--db", &db, "report", "android"])
        .assert()
        .success()
        .stdout(contains("[registered]"));

    rwk(name)
        .args(["--db", &db, "report", "android", "--hide-registered"])
        .assert()
        .success()
        .stdout(contains("No time registered on 'android'"));

    rwk(name)
        .args(["--db", &db, "register", "android", "--ids", "1"])
        .assert()
        .success()
        .stdout(contains("Unregistered 1 time interval(s)"));

    rwk(name)
        .args(["--db", &db, "register", "android", "--ids", "42"])
        .assert()
        .failure()
        .stderr(contains("Error: Time interval not found: 42"));
}

#[test]
fn remove_time_deletes_intervals() {
    let name = "cli_remove_time";
    let db = with_project(name);
    worked_day(name, &db);

    rwk(name)
        .args(["--db", &db, "remove-time", "android", "--ids", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 1 time interval(s)"));

    rwk(name)
        .args(["--db", &db, "report", "android"])
        .assert()
        .success()
        .stdout(contains("No time registered"));
}

#[test]
fn export_writes_csv_and_json() {
    let name = "cli_export";
    let db = with_project(name);
    worked_day(name, &db);

    let csv = temp_out(name, "csv");
    rwk(name)
        .args(["--db", &db, "export", "android", "--file", &csv, "--range", "2024-05"])
        .assert()
        .success();
    let content = fs::read_to_string(&csv).unwrap();
    assert!(content.contains("android"));
    assert_eq!(content.lines().count(), 2);

    rwk(name)
        .args(["--db", &db, "export", "android", "--file", &csv])
        .assert()
        .failure();

    let json = temp_out(name, "json");
    rwk(name)
        .args(["--db", &db, "export", "android", "--format", "json", "--file", &json, "--force"])
        .assert()
        .success();
    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));

    rwk(name)
        .args(["--db", &db, "export", "android", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn backup_and_restore_round_trip() {
    let name = "cli_backup";
    let db = with_project(name);
    worked_day(name, &db);

    let backup = temp_out(name, "sqlite");
    let zipped = temp_out(name, "zip");
    rwk(name)
        .args(["--db", &db, "backup", "--file", &backup, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&zipped).is_ok());

    rwk(name)
        .args(["--db", &db, "project", "remove", "android", "--yes"])
        .assert()
        .success();

    rwk(name)
        .args(["--db", &db, "restore", "--file", &zipped, "--yes"])
        .assert()
        .success()
        .stdout(contains("Database restored"));

    rwk(name)
        .args(["--db", &db, "report", "android"])
        .assert()
        .success()
        .stdout(contains("8:07 (+0:07)"));
}

#[test]
fn maintenance_commands_run() {
    let name = "cli_maintenance";
    let db = with_project(name);

    rwk(name)
        .args(["--db", &db, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));

    rwk(name)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("project_add"));

    rwk(name)
        .args(["--db", &db, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("max_interval_hours: 24"));
}

#[test]
fn oversized_paging_is_rejected() {
    let name = "cli_paging";
    let db = with_project(name);
    worked_day(name, &db);

    for args in [
        ["report", "android", "--page", "9223372036854775807"],
        ["report", "android", "--page-size", "9223372036854775807"],
        ["project", "list", "--page-size", "9223372036854775807"],
    ] {
        rwk(name)
            .args(["--db", &db])
            .args(args)
            .assert()
            .code(2)
            .stderr(contains("not in 1..=10000"));
    }

    rwk(name)
        .args(["--db", &db, "report", "android", "--page", "10000", "--page-size", "10000"])
        .assert()
        .success()
        .stdout(contains("page 10000/1"));
}

fn assert_restore_refused(name: &str, db: &str, backup: &str) {
    rwk(name)
        .args(["--db", db, "restore", "--file", backup, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Error:"));

    assert!(fs::metadata(std::path::Path::new(db).with_extension("restore")).is_err());

    rwk(name)
        .args(["--db", db, "project", "list"])
        .assert()
        .success()
        .stdout(contains("android"));
}

#[test]
fn restore_refuses_files_that_are_not_backups() {
    let name = "cli_restore_refused";
    let db = with_project(name);

    let garbage = temp_out(name, "txt");
    fs::write(&garbage, "not a database at all, just some text that is long enough").unwrap();
    assert_restore_refused(name, &db, &garbage);

    let empty = temp_out(name, "empty");
    fs::write(&empty, b"").unwrap();
    assert_restore_refused(name, &db, &empty);

    let foreign = temp_out(name, "foreign");
    rusqlite::Connection::open(&foreign)
        .unwrap()
        .execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);")
        .unwrap();
    assert_restore_refused(name, &db, &foreign);
}

#[test]
fn restore_removes_staging_file_when_extraction_fails() {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let name = "cli_restore_corrupt_zip";
    let db = with_project(name);

    let mut data = fs::read(&db).unwrap();
    assert!(data.len() > 200);

    let zipped = temp_out(name, "zip");
    let mut zip = zip::ZipWriter::new(fs::File::create(&zipped).unwrap());
    zip.start_file(
        "rworker.sqlite",
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored),
    )
    .unwrap();
    zip.write_all(&data).unwrap();
    zip.finish().unwrap();

    // Flip a stored byte so the entry fails its checksum while extracting.
    data = fs::read(&zipped).unwrap();
    let header = data
        .windows(16)
        .position(|w| w == b"SQLite format 3\0")
        .unwrap();
    data[header + 150] ^= 0xFF;
    fs::write(&zipped, &data).unwrap();

    assert_restore_refused(name, &db, &zipped);
}
