use chrono::NaiveDate;
use rtasklog::db::initialize::init_db;
use rtasklog::db::log::load_log;
use rtasklog::db::pool::DbPool;
use rtasklog::db::queries::{query_day, replace_day};
use rtasklog::errors::AppError;
use rtasklog::models::category::Category;
use rtasklog::models::time_log::{DEFAULT_USER_ID, NewEntry};
use rust_decimal::Decimal;
use std::str::FromStr;

mod common;
use common::{memory_pool, setup_test_db};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn entry(category: Category, task: &str, hours: &str) -> NewEntry {
    NewEntry {
        category,
        task_name: task.to_string(),
        hours: Decimal::from_str(hours).unwrap(),
    }
}

#[test]
fn test_replace_day_inserts_in_order() {
    let mut pool = memory_pool();
    let rows = vec![
        entry(Category::Work, "Design review", "2"),
        entry(Category::Tech, "Reading", "1.25"),
        entry(Category::Work, "Coding", "3.5"),
    ];

    let saved = replace_day(&mut pool.conn, day("2024-01-15"), DEFAULT_USER_ID, &rows).unwrap();
    assert_eq!(saved, 3);

    let loaded = query_day(&pool.conn, day("2024-01-15"), DEFAULT_USER_ID).unwrap();
    let names: Vec<&str> = loaded.iter().map(|e| e.task_name.as_str()).collect();
    assert_eq!(names, ["Design review", "Reading", "Coding"]);

    assert_eq!(loaded[1].hours, Decimal::from_str("1.25").unwrap());
    assert!(loaded.iter().all(|e| e.user_id == DEFAULT_USER_ID));
    assert!(loaded.iter().all(|e| e.date_str() == "2024-01-15"));
    assert!(loaded.iter().all(|e| !e.created_at.is_empty()));
}

#[test]
fn test_replace_day_discards_previous_entries() {
    let mut pool = memory_pool();
    let d = day("2024-05-01");

    replace_day(
        &mut pool.conn,
        d,
        DEFAULT_USER_ID,
        &[entry(Category::Work, "Old", "4")],
    )
    .unwrap();
    replace_day(
        &mut pool.conn,
        d,
        DEFAULT_USER_ID,
        &[
            entry(Category::Exercise, "Swim", "1"),
            entry(Category::Other, "Chores", "0.5"),
        ],
    )
    .unwrap();

    let loaded = query_day(&pool.conn, d, DEFAULT_USER_ID).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().all(|e| e.task_name != "Old"));
}

#[test]
fn test_constraint_violation_rolls_back_everything() {
    let mut pool = memory_pool();
    let d = day("2024-05-02");

    replace_day(
        &mut pool.conn,
        d,
        DEFAULT_USER_ID,
        &[entry(Category::Work, "Kept", "2")],
    )
    .unwrap();

    let err = replace_day(
        &mut pool.conn,
        d,
        DEFAULT_USER_ID,
        &[
            entry(Category::Tech, "Twice", "1"),
            entry(Category::Tech, "Twice", "1"),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Db(_)));
    assert!(err.to_string().contains("UNIQUE"));

    let loaded = query_day(&pool.conn, d, DEFAULT_USER_ID).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].task_name, "Kept");

    // a failed save leaves no audit line behind
    let saves = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|l| l.operation == "save")
        .count();
    assert_eq!(saves, 1);
}

#[test]
fn test_same_task_in_different_categories_is_allowed() {
    let mut pool = memory_pool();
    let rows = vec![
        entry(Category::Work, "Planning", "1"),
        entry(Category::PersonalTasks, "Planning", "1"),
    ];
    assert_eq!(
        replace_day(&mut pool.conn, day("2024-05-03"), DEFAULT_USER_ID, &rows).unwrap(),
        2
    );
}

#[test]
fn test_query_is_scoped_to_date_and_user() {
    let mut pool = memory_pool();

    replace_day(
        &mut pool.conn,
        day("2024-06-01"),
        DEFAULT_USER_ID,
        &[entry(Category::Work, "Mine", "1")],
    )
    .unwrap();
    replace_day(
        &mut pool.conn,
        day("2024-06-01"),
        2,
        &[entry(Category::Work, "Someone else", "1")],
    )
    .unwrap();
    replace_day(
        &mut pool.conn,
        day("2024-06-02"),
        DEFAULT_USER_ID,
        &[entry(Category::Work, "Next day", "1")],
    )
    .unwrap();

    let loaded = query_day(&pool.conn, day("2024-06-01"), DEFAULT_USER_ID).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].task_name, "Mine");

    // replacing user 1's day leaves user 2 alone
    replace_day(
        &mut pool.conn,
        day("2024-06-01"),
        DEFAULT_USER_ID,
        &[entry(Category::Tech, "Replaced", "2")],
    )
    .unwrap();
    assert_eq!(query_day(&pool.conn, day("2024-06-01"), 2).unwrap().len(), 1);
}

#[test]
fn test_save_writes_audit_line() {
    let mut pool = memory_pool();
    replace_day(
        &mut pool.conn,
        day("2024-07-01"),
        DEFAULT_USER_ID,
        &[entry(Category::Work, "A", "1")],
    )
    .unwrap();

    let log = load_log(&pool.conn).unwrap();
    let last = log.last().expect("audit line");
    assert_eq!(last.operation, "save");
    assert_eq!(last.target, "2024-07-01");
    assert_eq!(last.message, "replaced 0 entries with 1");
}

#[test]
fn test_file_store_survives_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let mut pool = DbPool::new(&db_path).unwrap();
        init_db(&pool.conn).unwrap();
        replace_day(
            &mut pool.conn,
            day("2024-08-08"),
            DEFAULT_USER_ID,
            &[entry(Category::Investment, "Portfolio", "0.75")],
        )
        .unwrap();
        pool.close().unwrap();
    }

    let pool = DbPool::new(&db_path).unwrap();
    // schema init is idempotent
    init_db(&pool.conn).unwrap();
    let loaded = query_day(&pool.conn, day("2024-08-08"), DEFAULT_USER_ID).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].category, Category::Investment);
    assert_eq!(loaded[0].hours, Decimal::from_str("0.75").unwrap());
}

#[test]
fn test_schema_rejects_unknown_category() {
    let pool = memory_pool();
    let res = pool.conn.execute(
        "INSERT INTO time_logs (user_id, log_date, category, task_name, hours, created_at)
         VALUES (1, '2024-01-01', 'work', 'x', '1', 'now')",
        [],
    );
    assert!(res.is_err());
}
