use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, login, rts, setup_test_db};

#[test]
fn test_list_shows_every_timesheet() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("3 of 3 timesheets"))
        .stdout(contains("john.contractor"))
        .stdout(contains("sarah.contractor"))
        .stdout(contains("No comments"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let db_path = setup_test_db("list_search");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list", "--search", "PAYMENT"])
        .assert()
        .success()
        .stdout(contains("1 of 3 timesheets"))
        .stdout(contains("API Integration"));

    rts()
        .args(["--db", &db_path, "list", "-s", "Sarah"])
        .assert()
        .success()
        .stdout(contains("1 of 3 timesheets"))
        .stdout(contains("Mobile App Development"));
}

#[test]
fn test_list_filters_combine() {
    let db_path = setup_test_db("list_combine");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "approve", "2"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("2 of 3 timesheets"));

    rts()
        .args([
            "--db",
            &db_path,
            "list",
            "--status",
            "pending",
            "--contractor",
            "john.contractor",
        ])
        .assert()
        .success()
        .stdout(contains("1 of 3 timesheets"))
        .stdout(contains("Website Redesign"));

    rts()
        .args(["--db", &db_path, "list", "--status", "all", "--contractor", "all"])
        .assert()
        .success()
        .stdout(contains("3 of 3 timesheets"));

    rts()
        .args([
            "--db",
            &db_path,
            "list",
            "--status",
            "rejected",
            "--search",
            "website",
        ])
        .assert()
        .success()
        .stdout(contains("0 of 3 timesheets"))
        .stdout(contains("No timesheets match the current filters."));
}

#[test]
fn test_list_period_filter() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2 of 3 timesheets"))
        .stdout(contains("September 2025"))
        .stdout(contains("Mobile App Development").not());

    rts()
        .args(["--db", &db_path, "list", "-p", "2025-09-02:2025-10-03"])
        .assert()
        .success()
        .stdout(contains("2 of 3 timesheets"))
        .stdout(contains("Website Redesign").not());

    rts()
        .args(["--db", &db_path, "list", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_rejects_unknown_status() {
    let db_path = setup_test_db("list_bad_status");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "list", "--status", "archived"])
        .assert()
        .failure()
        .stderr(contains("archived"));
}

#[test]
fn test_contractors_and_stats() {
    let db_path = setup_test_db("contractors_stats");
    init_db_with_data(&db_path);

    rts()
        .args(["--db", &db_path, "contractors"])
        .assert()
        .success()
        .stdout(contains("john.contractor (2 timesheets)"))
        .stdout(contains("sarah.contractor (1 timesheets)"));

    rts()
        .args(["--db", &db_path, "reject", "3"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("21.5h"))
        .stdout(contains("14.5h"))
        .stdout(contains("7h"));
}

#[test]
fn test_contractor_cannot_list() {
    let db_path = setup_test_db("contractor_cannot_list");
    init_db_with_data(&db_path);
    login(&db_path, "sarah.contractor");

    for cmd in ["list", "stats", "contractors"] {
        rts()
            .args(["--db", &db_path, cmd])
            .assert()
            .failure()
            .stderr(contains("requires the admin role"));
    }
}
