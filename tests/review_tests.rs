use predicates::str::contains;

mod common;
use common::{init_db_with_data, login, rts, setup_test_db};

#[test]
fn test_approve_and_reject_messages() {
    let db_path = setup_test_db("approve_reject_messages");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success()
        .stdout(contains(
            "Approved timesheet for john.contractor (8h on Website Redesign)",
        ));

    rts()
        .args(["--db", &db_path, "reject", "2"])
        .assert()
        .success()
        .stdout(contains(
            "Rejected timesheet for john.contractor (6.5h on API Integration)",
        ));

    rts()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Approved"))
        .stdout(contains("Admin User"));
}

#[test]
fn test_approve_is_idempotent_once_terminal() {
    let db_path = setup_test_db("approve_idempotent");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success()
        .stdout(contains("Timesheet #1 is already approved"));

    // only one approve row in the audit log
    let out = rts()
        .args(["--db", &db_path, "log", "--print", "--op", "approve"])
        .output()
        .expect("failed to print log");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("(#1)").count(), 1);
}

#[test]
fn test_conflicting_transition_fails() {
    let db_path = setup_test_db("conflicting_transition");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "reject", "3"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "approve", "3"])
        .assert()
        .failure()
        .stderr(contains("Timesheet #3 is already rejected; it cannot be approved"));
}

#[test]
fn test_review_keeps_status_and_stamps_reviewer() {
    let db_path = setup_test_db("review_keeps_status");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "review", "1"])
        .assert()
        .success()
        .stdout(contains("Timesheet for john.contractor marked for review"));

    rts()
        .args(["--db", &db_path, "list", "--status", "approved"])
        .assert()
        .success()
        .stdout(contains("1 of 3 timesheets"));

    rts()
        .args(["--db", &db_path, "review", "2"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Pending"))
        .stdout(contains("Admin User"));
}

#[test]
fn test_unknown_id_is_reported() {
    let db_path = setup_test_db("review_unknown_id");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "42"])
        .assert()
        .failure()
        .stderr(contains("Timesheet #42 not found"));
}

#[test]
fn test_contractor_cannot_approve() {
    let db_path = setup_test_db("contractor_cannot_approve");
    init_db_with_data(&db_path);
    login(&db_path, "john.contractor");

    rts()
        .args(["--db", &db_path, "approve", "1"])
        .assert()
        .failure()
        .stderr(contains("requires the admin role"))
        .stderr(contains("submit, mine, show"));
}
