use chrono::{Duration, Local, NaiveDate};
use rtimesheet::config::Config;
use rtimesheet::core::auth::AuthLogic;
use rtimesheet::core::filter::{TimesheetFilter, contractors};
use rtimesheet::core::review::{ReviewAction, ReviewLogic};
use rtimesheet::core::stats::StatusSummary;
use rtimesheet::core::store;
use rtimesheet::core::submit::SubmitLogic;
use rtimesheet::db::log::load_log;
use rtimesheet::db::pool::DbPool;
use rtimesheet::db::storage::{self, TIMESHEETS_KEY};
use rtimesheet::errors::AppError;
use rtimesheet::models::status::TimesheetStatus;
use rtimesheet::models::timesheet::Timesheet;
use rtimesheet::utils::date::parse_period;

fn sheet(id: u64, name: &str, date: &str, project: &str, hours: f64) -> Timesheet {
    Timesheet {
        id,
        contractor_id: id.to_string(),
        contractor_name: name.to_string(),
        date: date.to_string(),
        project: project.to_string(),
        hours_worked: hours,
        comments: String::new(),
        status: TimesheetStatus::Pending,
        submitted_at: "2025-09-01T10:00:00+00:00".to_string(),
        reviewed_at: None,
        reviewed_by: None,
    }
}

#[test]
fn absent_list_reads_as_empty_and_ids_start_at_one() {
    let pool = DbPool::in_memory().expect("db");
    storage::remove_item(&pool.conn, TIMESHEETS_KEY).expect("remove");

    let all = store::load_all(&pool.conn).expect("load");
    assert!(all.is_empty());
    assert_eq!(store::next_id(&all).expect("id"), 1);
}

#[test]
fn next_id_follows_the_highest_id_not_the_length() {
    let sheets = vec![
        sheet(3, "a", "2025-09-01", "X", 1.0),
        sheet(7, "b", "2025-09-02", "X", 1.0),
    ];
    assert_eq!(store::next_id(&sheets).expect("id"), 8);
}

#[test]
fn exhausted_ids_fail_instead_of_wrapping() {
    let cfg = Config::default();
    let mut pool = DbPool::in_memory().expect("db");
    let raw = r#"[{"id":"18446744073709551615","contractorId":"1",
        "contractorName":"john.contractor","date":"2025-09-01",
        "project":"Website Redesign","hoursWorked":8,"status":"pending",
        "submittedAt":"2025-09-01T10:00:00Z"}]"#;
    storage::set_item(&pool.conn, TIMESHEETS_KEY, raw).expect("seed");

    let sheets = store::load_all(&pool.conn).expect("load");
    assert_eq!(sheets[0].id, u64::MAX);
    assert!(matches!(
        store::next_id(&sheets),
        Err(AppError::Storage { .. })
    ));

    let john = AuthLogic::login(&mut pool, &cfg, "john.contractor").expect("login");
    let draft = SubmitLogic::validate(&cfg, "2025-09-02", "API Integration", 2.0, None)
        .expect("valid");
    assert!(SubmitLogic::apply(&mut pool, &john, draft).is_err());
    assert_eq!(store::load_all(&pool.conn).expect("load").len(), 1);
}

#[test]
fn ownership_falls_back_to_the_contractor_name() {
    let cfg = Config::default();
    let mut pool = DbPool::in_memory().expect("db");
    let john = AuthLogic::login(&mut pool, &cfg, "john.contractor").expect("login");

    let mut by_name = sheet(1, "john.contractor", "2025-09-01", "X", 1.0);
    by_name.contractor_id = "legacy-42".to_string();
    assert_ne!(by_name.contractor_id, john.id);
    assert!(by_name.is_owned_by(&john));

    let mut by_id = sheet(2, "john.renamed", "2025-09-01", "X", 1.0);
    by_id.contractor_id = john.id.clone();
    assert!(by_id.is_owned_by(&john));

    let mut other = sheet(3, "sarah.contractor", "2025-09-01", "X", 1.0);
    other.contractor_id = "2".to_string();
    assert!(!other.is_owned_by(&john));
}

#[test]
fn corrupt_list_is_an_error_and_is_left_untouched() {
    let mut pool = DbPool::in_memory().expect("db");
    storage::set_item(&pool.conn, TIMESHEETS_KEY, "{not json").expect("seed");

    match store::load_all(&pool.conn) {
        Err(AppError::Storage { key, .. }) => assert_eq!(key, TIMESHEETS_KEY),
        other => panic!("expected storage error, got {other:?}"),
    }

    let res = store::update(&mut pool, |_, sheets| {
        sheets.push(sheet(1, "a", "2025-09-01", "X", 1.0));
        Ok(())
    });
    assert!(res.is_err());
    assert_eq!(
        storage::get_item(&pool.conn, TIMESHEETS_KEY).expect("get"),
        Some("{not json".to_string())
    );
}

#[test]
fn ids_are_written_as_strings_and_read_from_numbers() {
    let raw = r#"[{"id":5,"contractorId":1,"contractorName":"john.contractor",
        "date":"2025-09-01","project":"Website Redesign","hoursWorked":8,
        "status":"approved","submittedAt":"2025-09-01T10:00:00Z",
        "reviewedAt":"2025-09-02T10:00:00Z","reviewedBy":"Admin User"}]"#;

    let sheets: Vec<Timesheet> = serde_json::from_str(raw).expect("parse");
    assert_eq!(sheets[0].id, 5);
    assert_eq!(sheets[0].contractor_id, "1");
    assert_eq!(sheets[0].comments, "");
    assert_eq!(sheets[0].status, TimesheetStatus::Approved);

    let back = serde_json::to_value(&sheets[0]).expect("serialize");
    assert_eq!(back["id"], "5");
    assert_eq!(back["hoursWorked"], 8.0);

    let pending = sheet(2, "a", "2025-09-01", "X", 1.0);
    let v = serde_json::to_value(&pending).expect("serialize");
    assert!(v.get("reviewedAt").is_none());
    assert!(v.get("reviewedBy").is_none());
}

#[test]
fn validate_accepts_a_good_form() {
    let cfg = Config::default();
    let draft = SubmitLogic::validate(
        &cfg,
        "2025-09-01",
        "  security audit ",
        7.5,
        Some("  scope review "),
    )
    .expect("valid");

    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 9, 1).expect("date"));
    assert_eq!(draft.project, "Security Audit");
    assert_eq!(draft.comments, "scope review");
}

#[test]
fn validate_rejects_bad_forms() {
    let cfg = Config::default();

    let tomorrow = (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();

    let cases: [(&str, &str, f64); 10] = [
        ("", "Website Redesign", 8.0),
        ("2025-02-30", "Website Redesign", 8.0),
        ("2999-01-01", "Website Redesign", 8.0),
        (tomorrow.as_str(), "Website Redesign", 8.0),
        ("1899-12-31", "Website Redesign", 8.0),
        ("2025-09-01", "", 8.0),
        ("2025-09-01", "Website Redesign", 0.0),
        ("2025-09-01", "Website Redesign", f64::NAN),
        ("2025-09-01", "Website Redesign", 24.5),
        ("2025-09-01", "Website Redesign", 1.2),
    ];

    for (date, project, hours) in cases {
        assert!(
            SubmitLogic::validate(&cfg, date, project, hours, None).is_err(),
            "{date:?} {project:?} {hours} should be rejected"
        );
    }

    assert!(matches!(
        SubmitLogic::validate(&cfg, "2999-01-01", "Website Redesign", 8.0, None),
        Err(AppError::DateOutOfRange(_))
    ));
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert!(SubmitLogic::validate(&cfg, &today, "Website Redesign", 8.0, None).is_ok());
    assert!(SubmitLogic::validate(&cfg, "1900-01-01", "Website Redesign", 8.0, None).is_ok());

    let mut open = Config::default();
    open.projects.clear();
    let draft = SubmitLogic::validate(&open, "2025-09-01", "Moon Base", 24.0, None)
        .expect("free-form project");
    assert_eq!(draft.project, "Moon Base");
}

#[test]
fn transition_rules() {
    let ts = sheet(1, "john.contractor", "2025-09-01", "X", 8.0);

    let (approved, changed) =
        ReviewLogic::transition(&ts, ReviewAction::Approve, "Admin User", "t1").expect("approve");
    assert!(changed);
    assert_eq!(approved.status, TimesheetStatus::Approved);
    assert_eq!(approved.reviewed_by.as_deref(), Some("Admin User"));
    assert_eq!(approved.reviewed_at.as_deref(), Some("t1"));

    // same action again: untouched, not re-stamped
    let (again, changed) =
        ReviewLogic::transition(&approved, ReviewAction::Approve, "Someone", "t2")
            .expect("repeat");
    assert!(!changed);
    assert_eq!(again, approved);

    match ReviewLogic::transition(&approved, ReviewAction::Reject, "Admin User", "t3") {
        Err(AppError::InvalidTransition { id, from, to }) => {
            assert_eq!(id, 1);
            assert_eq!(from, TimesheetStatus::Approved);
            assert_eq!(to, TimesheetStatus::Rejected);
        }
        other => panic!("expected invalid transition, got {other:?}"),
    }

    // review stamps but never moves the status
    let (reviewed, changed) =
        ReviewLogic::transition(&approved, ReviewAction::Review, "Auditor", "t4").expect("review");
    assert!(changed);
    assert_eq!(reviewed.status, TimesheetStatus::Approved);
    assert_eq!(reviewed.reviewed_by.as_deref(), Some("Auditor"));
    assert_eq!(reviewed.reviewed_at.as_deref(), Some("t4"));
}

#[test]
fn submit_and_review_through_the_store() {
    let cfg = Config::default();
    let mut pool = DbPool::in_memory().expect("db");

    let john = AuthLogic::login(&mut pool, &cfg, "John.Contractor").expect("login");
    assert_eq!(john.username, "john.contractor");

    let draft = SubmitLogic::validate(&cfg, "2025-09-01", "API Integration", 4.0, None)
        .expect("valid");
    let first = SubmitLogic::apply(&mut pool, &john, draft.clone()).expect("submit");
    let second = SubmitLogic::apply(&mut pool, &john, draft).expect("submit");
    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(first.status, TimesheetStatus::Pending);

    // contractors may not review
    let err = ReviewLogic::apply(&mut pool, &john, 1, ReviewAction::Approve).unwrap_err();
    assert!(matches!(err, AppError::Forbidden { .. }));

    let admin = AuthLogic::login(&mut pool, &cfg, "admin").expect("login");
    assert!(SubmitLogic::validate(&cfg, "2025-09-01", "API Integration", 4.0, None)
        .and_then(|d| SubmitLogic::apply(&mut pool, &admin, d))
        .is_err());

    let outcome = ReviewLogic::apply(&mut pool, &admin, 2, ReviewAction::Reject).expect("reject");
    assert!(outcome.changed);
    assert_eq!(
        outcome.message(),
        "Rejected timesheet for john.contractor (4h on API Integration)"
    );

    let err = ReviewLogic::apply(&mut pool, &admin, 9, ReviewAction::Approve).unwrap_err();
    assert!(matches!(err, AppError::TimesheetNotFound(9)));

    let stored = store::find(&pool.conn, 2).expect("find");
    assert_eq!(stored.status, TimesheetStatus::Rejected);
    assert_eq!(stored.reviewed_by.as_deref(), Some("Admin User"));
    assert_eq!(store::find(&pool.conn, 1).expect("find").status, TimesheetStatus::Pending);

    let ops: Vec<String> = load_log(&pool.conn, None)
        .expect("log")
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert!(ops.contains(&"submit".to_string()));
    assert!(ops.contains(&"reject".to_string()));

    let out = AuthLogic::logout(&mut pool).expect("logout");
    assert_eq!(out.map(|s| s.username), Some("admin".to_string()));
    assert!(AuthLogic::logout(&mut pool).expect("logout").is_none());
    assert!(matches!(
        AuthLogic::current(&pool.conn),
        Err(AppError::NotLoggedIn)
    ));
}

#[test]
fn filter_is_an_intersection_in_any_order() {
    let mut sheets = vec![
        sheet(1, "john.contractor", "2025-09-01", "Website Redesign", 8.0),
        sheet(2, "john.contractor", "2025-09-15", "API Integration", 6.5),
        sheet(3, "sarah.contractor", "2025-10-03", "Website Redesign", 7.0),
        sheet(4, "sarah.contractor", "2025-09-20", "Security Audit", 3.0),
    ];
    sheets[1].comments = "Payment gateway".to_string();
    sheets[2].status = TimesheetStatus::Approved;

    let f = TimesheetFilter::from_args(Some("WEBSITE"), Some("all"), None, None).expect("filter");
    let ids: Vec<u64> = f.apply(&sheets).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let f = TimesheetFilter::from_args(Some("gateway"), None, None, None).expect("filter");
    assert_eq!(f.apply(&sheets).len(), 1);

    // the term is matched as typed: blanks are not trimmed away
    let f = TimesheetFilter::from_args(Some("  "), None, None, None).expect("filter");
    assert!(f.apply(&sheets).is_empty());
    let f = TimesheetFilter::from_args(Some(" gateway"), None, None, None).expect("filter");
    assert_eq!(f.apply(&sheets).len(), 1);
    let f = TimesheetFilter::from_args(Some(""), None, None, None).expect("filter");
    assert_eq!(f.apply(&sheets).len(), 4);

    let f = TimesheetFilter::from_args(
        Some("website"),
        Some("pending"),
        Some("john.contractor"),
        Some("2025-09"),
    )
    .expect("filter");
    let combined: Vec<u64> = f.apply(&sheets).iter().map(|t| t.id).collect();
    assert_eq!(combined, vec![1]);

    // every single-predicate pass, applied in reverse, keeps the same set
    let reversed: Vec<u64> = sheets
        .iter()
        .filter(|t| f.matches_period(t))
        .filter(|t| f.matches_contractor(t))
        .filter(|t| f.matches_status(t))
        .filter(|t| f.matches_search(t))
        .map(|t| t.id)
        .collect();
    assert_eq!(reversed, combined);

    // exact contractor match only
    let f = TimesheetFilter::from_args(None, None, Some("john"), None).expect("filter");
    assert!(f.apply(&sheets).is_empty());

    assert!(TimesheetFilter::from_args(None, Some("archived"), None, None).is_err());

    assert_eq!(
        contractors(&sheets),
        vec!["john.contractor".to_string(), "sarah.contractor".to_string()]
    );

    let summary = StatusSummary::from_sheets(&sheets);
    assert_eq!(summary.count(TimesheetStatus::Pending), 3);
    assert_eq!(summary.hours(TimesheetStatus::Approved), 7.0);
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.total_hours(), 24.5);
}

#[test]
fn period_forms() {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("date");

    assert_eq!(parse_period("2024").expect("year"), (d(2024, 1, 1), d(2024, 12, 31)));
    assert_eq!(parse_period("2024-02").expect("month"), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_period("2025-12").expect("month"), (d(2025, 12, 1), d(2025, 12, 31)));
    assert_eq!(parse_period("2025-09-03").expect("day"), (d(2025, 9, 3), d(2025, 9, 3)));
    assert_eq!(
        parse_period("2025-01:2025-03").expect("range"),
        (d(2025, 1, 1), d(2025, 3, 31))
    );

    assert!(parse_period("2025-03:2025-01").is_err());
    assert!(parse_period("2025:2025-03").is_err());
    assert!(parse_period("25-1").is_err());
}
