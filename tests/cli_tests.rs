use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_entries, itl, setup_test_db, temp_out};

/// First id printed by `logbook list --json`.
fn first_id(db_path: &str) -> String {
    let out = itl()
        .args(["--db", db_path, "--json", "logbook", "list"])
        .output()
        .expect("run list");
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json outcome");
    value["data"][0]["id"].as_str().expect("id").to_string()
}

#[test]
fn init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    itl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    itl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn add_list_edit_delete_roundtrip() {
    let db_path = setup_test_db("cli_crud");
    init_db_with_entries(&db_path);

    itl()
        .args(["--db", &db_path, "logbook", "list"])
        .assert()
        .success()
        .stdout(contains("Network Maintenance"))
        .stdout(contains("Software Installation"))
        .stdout(contains("Total Entries: 2"));

    // newest first: the second entry added comes back first
    let id = first_id(&db_path);

    itl()
        .args(["--db", &db_path, "logbook", "edit", &id, "--status", "completed"])
        .assert()
        .success()
        .stdout(contains("updated"));

    itl()
        .args(["--db", &db_path, "logbook", "show", &id])
        .assert()
        .success()
        .stdout(contains("Software Installation").and(contains("Completed")));

    itl()
        .args(["--db", &db_path, "logbook", "delete", &id])
        .assert()
        .success();

    itl()
        .args(["--db", &db_path, "logbook", "list"])
        .assert()
        .success()
        .stdout(contains("Software Installation").not())
        .stdout(contains("Total Entries: 1"));
}

#[test]
fn list_filters_by_status_and_search() {
    let db_path = setup_test_db("cli_filters");
    init_db_with_entries(&db_path);

    itl()
        .args(["--db", &db_path, "logbook", "list", "--status", "in-progress"])
        .assert()
        .success()
        .stdout(contains("Software Installation"))
        .stdout(contains("Network Maintenance").not());

    itl()
        .args(["--db", &db_path, "logbook", "list", "-s", "ROUTER"])
        .assert()
        .success()
        .stdout(contains("Network Maintenance"))
        .stdout(contains("Total Entries: 1"));

    itl()
        .args(["--db", &db_path, "logbook", "list", "--from", "2025-05-11"])
        .assert()
        .success()
        .stdout(contains("Total Entries: 1"));
}

#[test]
fn invalid_form_fails_with_field_messages() {
    let db_path = setup_test_db("cli_invalid");
    itl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    itl()
        .args([
            "--db",
            &db_path,
            "logbook",
            "add",
            "--work",
            "X",
            "--department",
            "it",
            "--pic",
            "Ana",
            "--status",
            "pending",
        ])
        .assert()
        .failure()
        .stderr(contains("Jenis Pekerjaan must be at least 2 characters."));

    itl()
        .args(["--db", &db_path, "logbook", "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn edit_unknown_id_reports_not_found() {
    let db_path = setup_test_db("cli_not_found");
    init_db_with_entries(&db_path);

    itl()
        .args(["--db", &db_path, "--json", "logbook", "edit", "nope", "--pic", "Budi"])
        .assert()
        .failure()
        .stdout(contains("\"not_found\": true"));

    itl()
        .args(["--db", &db_path, "logbook", "delete", "nope"])
        .assert()
        .success();
}

#[test]
fn backup_add_and_list() {
    let db_path = setup_test_db("cli_backup");
    itl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    itl()
        .args([
            "--db", &db_path, "backup", "add", "--date", "2025-06-03", "--shift", "pagi", "--pic",
            "Rina", "--time", "07:45:00",
        ])
        .assert()
        .success()
        .stdout(contains("Backup log saved"));

    itl()
        .args([
            "--db", &db_path, "backup", "add", "--date", "2025-06-03", "--shift", "malam", "--pic",
            "Rina",
        ])
        .assert()
        .failure()
        .stderr(contains("shift"));

    itl()
        .args(["--db", &db_path, "backup", "list", "--shift", "pagi"])
        .assert()
        .success()
        .stdout(contains("03/06/2025").and(contains("Rina")))
        .stdout(contains("Total Entries: 1"));
}

#[test]
fn export_logbook_csv_and_refuse_overwrite() {
    let db_path = setup_test_db("cli_export");
    init_db_with_entries(&db_path);
    let out = temp_out("cli_export_logbook", "csv");

    itl()
        .args([
            "--db", &db_path, "logbook", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("No. PR,Tanggal Mulai,Jenis Pekerjaan"));
    assert!(content.contains("PR-2025-001"));
    assert!(content.contains("10/05/2025"));

    // existing file, no --force, answer "n"
    itl()
        .args([
            "--db", &db_path, "logbook", "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();

    itl()
        .args([
            "--db", &db_path, "logbook", "export", "--format", "csv", "--file", &out, "--force",
            "--status", "completed",
        ])
        .assert()
        .success();
    let filtered = fs::read_to_string(&out).expect("read exported csv");
    assert!(!filtered.contains("Software Installation"));
}

#[test]
fn export_backup_xlsx() {
    let db_path = setup_test_db("cli_export_xlsx");
    itl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    let out = temp_out("cli_export_backup", "xlsx");

    itl()
        .args([
            "--db", &db_path, "backup", "export", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX (empty dataset) export completed"));

    assert!(fs::metadata(&out).expect("xlsx written").len() > 0);
}

#[test]
fn home_filters_sample_entries() {
    itl()
        .args(["home"])
        .assert()
        .success()
        .stdout(contains("IT Department Logbook"))
        .stdout(contains("Total Entries: 3"));

    itl()
        .args(["home", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("Hardware Replacement"))
        .stdout(contains("Network Maintenance").not());

    itl()
        .args(["home", "--sort", "pic", "--delete", "1"])
        .assert()
        .success()
        .stdout(contains("Jane Smith").not())
        .stdout(contains("Total Entries: 2"));
}

#[test]
fn db_info_counts_rows() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_entries(&db_path);

    itl()
        .args(["--db", &db_path, "--json", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("\"logbook_entries\": 2"))
        .stdout(contains("\"first_start\": \"2025-05-10\""));
}
