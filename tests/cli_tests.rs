use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{init_cli_db, rtl, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rtl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_save_then_show_day() {
    let db_path = setup_test_db("cli_save_show");
    init_cli_db(&db_path);

    rtl()
        .args([
            "--db",
            &db_path,
            "save",
            "2024-01-15",
            "--row",
            "WORK;Design review;2",
            "--row",
            "WORK;Coding;3.5",
        ])
        .assert()
        .success()
        .stdout(contains("Saved 2 time log(s) for 2024-01-15"));

    rtl()
        .args(["--db", &db_path, "show", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("Time logs for 2024-01-15"))
        .stdout(contains("Design review"))
        .stdout(contains("Coding"))
        .stdout(contains("5.5"));
}

#[test]
fn test_save_replaces_whole_day() {
    let db_path = setup_test_db("cli_replace");
    init_cli_db(&db_path);

    rtl()
        .args(["--db", &db_path, "save", "2024-02-02", "--row", "TECH;Old task;1"])
        .assert()
        .success();

    rtl()
        .args([
            "--db",
            &db_path,
            "save",
            "2024-02-02",
            "--row",
            "EXERCISE;Cycling;1.5",
        ])
        .assert()
        .success();

    rtl()
        .args(["--db", &db_path, "show", "2024-02-02"])
        .assert()
        .success()
        .stdout(contains("Cycling"))
        .stdout(contains("Old task").not());
}

#[test]
fn test_save_with_invalid_row_fails_and_persists_nothing() {
    let db_path = setup_test_db("cli_invalid");
    init_cli_db(&db_path);

    rtl()
        .args([
            "--db",
            &db_path,
            "save",
            "2024-03-03",
            "--row",
            "WORK;Fine;1",
            "--row",
            "Work;Wrong case;1",
        ])
        .assert()
        .failure()
        .stderr(contains("row 2: category \"Work\" is not allowed"));

    rtl()
        .args(["--db", &db_path, "show", "2024-03-03"])
        .assert()
        .success()
        .stdout(contains("No time logs for 2024-03-03"));
}

#[test]
fn test_save_rejects_bad_row_syntax_and_date() {
    let db_path = setup_test_db("cli_bad_syntax");
    init_cli_db(&db_path);

    rtl()
        .args(["--db", &db_path, "save", "2024-03-04", "--row", "WORK-Coding-1"])
        .assert()
        .failure()
        .stderr(contains("expected CATEGORY;TASK;HOURS"));

    rtl()
        .args(["--db", &db_path, "save", "2024/03/04", "--row", "WORK;Coding;1"])
        .assert()
        .failure()
        .stderr(contains("logDate has an invalid format"));

    rtl()
        .args(["--db", &db_path, "show", "2024/03/04"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");
    init_cli_db(&db_path);

    rtl()
        .args(["--db", &db_path, "save", "2024-04-04", "--row", "OTHER;Misc;0.5"])
        .assert()
        .success();

    rtl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("save"))
        .stdout(contains("2024-04-04"))
        .stdout(contains("replaced 0 entries with 1"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_cli_db(&db_path);

    rtl()
        .args([
            "--db",
            &db_path,
            "save",
            "2024-05-05",
            "--row",
            "INVESTMENT;Research;2",
            "--row",
            "TECH;Docs;1",
        ])
        .assert()
        .success();

    rtl()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total entries:"))
        .stdout(contains("2024-05-05"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_cli_db(&db_path);

    let plain = temp_out("cli_backup_plain", "sqlite");
    rtl()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    // refuses to overwrite without --force
    rtl()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rtl()
        .args(["--db", &db_path, "backup", "--file", &plain, "--force"])
        .assert()
        .success();

    let zipped_src = temp_out("cli_backup_zip", "sqlite");
    let zipped = Path::new(&zipped_src).with_extension("zip");
    std::fs::remove_file(&zipped).ok();

    rtl()
        .args(["--db", &db_path, "backup", "--file", &zipped_src, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(zipped.exists());
    assert!(!Path::new(&zipped_src).exists());
}

#[test]
fn test_save_and_show_on_fresh_database_without_init() {
    let db_path = setup_test_db("cli_fresh_save");

    rtl()
        .args(["--db", &db_path, "save", "2024-04-01", "--row", "WORK;Standup;0.5"])
        .assert()
        .success()
        .stdout(contains("Saved 1 time log(s) for 2024-04-01"));

    rtl()
        .args(["--db", &db_path, "show", "2024-04-01"])
        .assert()
        .success()
        .stdout(contains("Standup"))
        .stdout(contains("0.5"));

    let empty_path = setup_test_db("cli_fresh_show");
    rtl()
        .args(["--db", &empty_path, "show", "2024-04-01"])
        .assert()
        .success()
        .stdout(contains("No time logs for 2024-04-01"));
}
