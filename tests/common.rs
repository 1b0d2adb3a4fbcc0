#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME/APPDATA pointed at a scratch directory so a
/// developer's own configuration never leaks into the tests.
pub fn rts() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimesheet_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn login(db_path: &str, user: &str) {
    rts()
        .args(["--db", db_path, "login", user])
        .assert()
        .success();
}

pub fn submit(db_path: &str, date: &str, project: &str, hours: &str, comment: &str) {
    rts()
        .args([
            "--db", db_path, "submit", "--date", date, "--project", project, "--hours", hours,
            "--comment", comment,
        ])
        .assert()
        .success();
}

/// Initialize DB and submit a small dataset from two contractors:
/// #1 and #2 by john.contractor, #3 by sarah.contractor.
/// Leaves the admin logged in.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    login(db_path, "john.contractor");
    submit(db_path, "2025-09-01", "Website Redesign", "8", "Homepage layout");
    submit(db_path, "2025-09-02", "API Integration", "6.5", "Payment gateway");

    login(db_path, "sarah.contractor");
    submit(db_path, "2025-10-03", "Mobile App Development", "7", "");

    login(db_path, "admin");
}
