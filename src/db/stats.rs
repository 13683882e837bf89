use crate::db::pool::DbPool;
use crate::db::store::count_rows;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use serde::Serialize;
use std::fs;

#[derive(Debug, Clone, Serialize)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub backup_logs: i64,
    pub logbook_entries: i64,
    pub log_rows: i64,
    pub first_start: Option<String>,
    pub last_start: Option<String>,
}

/// Row count, or 0 for a table that has not been migrated in yet.
fn count_if_present(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    let present: bool = pool.conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [table],
        |row| row.get(0),
    )?;
    if present {
        count_rows(&pool.conn, table)
    } else {
        Ok(0)
    }
}

pub fn collect_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<DbInfo> {
    let size_bytes = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let logbook_entries = count_if_present(pool, "logbook_entries")?;

    let (first_start, last_start): (Option<String>, Option<String>) = if logbook_entries > 0 {
        pool.conn
            .query_row(
                "SELECT MIN(tanggal_mulai), MAX(tanggal_mulai) FROM logbook_entries",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?
            .unwrap_or((None, None))
    } else {
        (None, None)
    };

    Ok(DbInfo {
        path: db_path.to_string(),
        size_bytes,
        backup_logs: count_if_present(pool, "backup_logs")?,
        logbook_entries,
        log_rows: count_if_present(pool, "log")?,
        first_start,
        last_start,
    })
}

pub fn print_db_info(info: &DbInfo) {
    let file_mb = (info.size_bytes as f64) / (1024.0 * 1024.0);
    let or_dashes = |v: &Option<String>| v.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{}{RESET}", info.path);
    println!("{CYAN}• Size:{RESET} {file_mb:.2} MB");
    println!(
        "{CYAN}• Backup logs:{RESET} {GREEN}{}{RESET}",
        info.backup_logs
    );
    println!(
        "{CYAN}• Logbook entries:{RESET} {GREEN}{}{RESET}",
        info.logbook_entries
    );
    println!("{CYAN}• Audit rows:{RESET} {}", info.log_rows);
    println!("{CYAN}• Logbook span:{RESET}");
    println!("    from: {}", or_dashes(&info.first_start));
    println!("    to:   {}", or_dashes(&info.last_start));
    println!();
}
