//! Row-level storage operations shared by every record table.
//!
//! This is the persistence boundary: callers hand in column/value pairs and
//! get rows back. Identifiers and timestamps are assigned here, never by the
//! caller.

use crate::core::filter::QueryFragment;
use chrono::{SecondsFormat, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params_from_iter};
use uuid::Uuid;

pub type Columns = Vec<(&'static str, Value)>;

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Insert a row, assigning `id`, `created_at` and `updated_at`.
/// Returns the new id.
pub fn insert_row(conn: &Connection, table: &str, columns: Columns) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    let now = now_timestamp();

    let mut names: Vec<&str> = vec!["id", "created_at", "updated_at"];
    let mut values: Vec<Value> = vec![
        Value::Text(id.clone()),
        Value::Text(now.clone()),
        Value::Text(now),
    ];

    for (name, value) in columns {
        names.push(name);
        values.push(value);
    }

    let placeholders = (1..=names.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        names.join(", ")
    );

    conn.execute(&sql, params_from_iter(values))?;
    Ok(id)
}

/// Select every row matching `filter`, most recently created first.
pub fn select_rows<T, F>(
    conn: &Connection,
    table: &str,
    filter: &QueryFragment,
    map: F,
) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> Result<T>,
{
    let sql = format!(
        "SELECT * FROM {table}{} ORDER BY created_at DESC, rowid DESC",
        filter.where_clause()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(filter.params.iter()), map)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_by_id<T, F>(conn: &Connection, table: &str, id: &str, map: F) -> Result<Option<T>>
where
    F: FnOnce(&Row<'_>) -> Result<T>,
{
    let sql = format!("SELECT * FROM {table} WHERE id = ?1");
    conn.query_row(&sql, [id], map).optional()
}

/// Overwrite the given columns of one row and refresh `updated_at`.
/// Returns the number of rows touched (0 when `id` does not exist).
pub fn update_row(conn: &Connection, table: &str, id: &str, columns: Columns) -> Result<usize> {
    let mut sets: Vec<String> = vec!["updated_at = ?1".to_string()];
    let mut values: Vec<Value> = vec![Value::Text(now_timestamp())];

    for (name, value) in columns {
        values.push(value);
        sets.push(format!("{name} = ?{}", values.len()));
    }

    values.push(Value::Text(id.to_string()));
    let sql = format!(
        "UPDATE {table} SET {} WHERE id = ?{}",
        sets.join(", "),
        values.len()
    );

    conn.execute(&sql, params_from_iter(values))
}

/// Delete one row. Returns the number of rows removed; a missing id is not
/// an error.
pub fn delete_row(conn: &Connection, table: &str, id: &str) -> Result<usize> {
    let sql = format!("DELETE FROM {table} WHERE id = ?1");
    conn.execute(&sql, [id])
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    conn.query_row(&sql, [], |row| row.get(0))
}
