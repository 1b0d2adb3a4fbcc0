use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, rts, setup_test_db, temp_out};

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "3"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("submit"))
        .stdout(contains("login"))
        .stdout(contains("approve"))
        .stdout(contains("sarah.contractor by Admin User (status approved)"));

    rts()
        .args(["--db", &db_path, "log", "--print", "--op", "submit"])
        .assert()
        .success()
        .stdout(contains("john.contractor submitted 6.5h for API Integration on 2025-09-02"));
}

#[test]
fn test_db_check_reports_timesheets() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity check passed"))
        .stdout(contains("3 timesheets, ids unique."));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rts()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).expect("backup written").len() > 0);

    let zipped = temp_out("backup_zip", "sqlite");
    let zip_path = Path::new(&zipped).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    rts()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));
    assert!(zip_path.exists());
    assert!(!Path::new(&zipped).exists());
}
