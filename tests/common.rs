#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use itlogbook::db::initialize::init_db;
use itlogbook::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a private temp dir so no real config is
/// read or written.
pub fn itl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("itlogbook_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("itlogbook");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_itlogbook.sqlite", name));
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

/// Fresh in-memory database with the full schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Initialize a DB through the CLI and add a small logbook.
pub fn init_db_with_entries(db_path: &str) {
    itl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    itl()
        .args([
            "--db",
            db_path,
            "logbook",
            "add",
            "--work",
            "Network Maintenance",
            "--department",
            "it",
            "--start",
            "2025-05-10",
            "--end",
            "2025-05-12",
            "--pic",
            "John Doe",
            "--status",
            "completed",
            "--notes",
            "Replaced faulty router",
            "--pr",
            "PR-2025-001",
        ])
        .assert()
        .success();

    itl()
        .args([
            "--db",
            db_path,
            "logbook",
            "add",
            "--work",
            "Software Installation",
            "--department",
            "finance",
            "--start",
            "2025-05-15",
            "--pic",
            "Jane Smith",
            "--status",
            "in-progress",
        ])
        .assert()
        .success();
}
