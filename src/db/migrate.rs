use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_backup_logs",
        description: "Created backup_logs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS backup_logs (
            id          TEXT PRIMARY KEY,
            tanggal     TEXT NOT NULL,
            shift       TEXT NOT NULL CHECK(shift IN ('pagi','siang','sore')),
            pic         TEXT NOT NULL,
            timestamp   TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_logbook_entries",
        description: "Created logbook_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS logbook_entries (
            id               TEXT PRIMARY KEY,
            tanggal_mulai    TEXT NOT NULL,
            jenis_pekerjaan  TEXT NOT NULL,
            department       TEXT NOT NULL,
            tanggal_selesai  TEXT,
            pic              TEXT NOT NULL,
            status           TEXT NOT NULL CHECK(status IN ('pending','in-progress','completed')),
            keterangan       TEXT,
            nomor_pr         TEXT,
            created_at       TEXT NOT NULL,
            updated_at       TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250312_0003_created_at_indexes",
        description: "Added created_at / filter indexes",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_backup_logs_created ON backup_logs(created_at);
        CREATE INDEX IF NOT EXISTS idx_logbook_created ON logbook_entries(created_at);
        CREATE INDEX IF NOT EXISTS idx_logbook_status ON logbook_entries(status);
        CREATE INDEX IF NOT EXISTS idx_logbook_department ON logbook_entries(department);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    tracing::info!(version = m.version, "{}", m.description);
    Ok(())
}

/// Public entry point: run all pending migrations.
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}
