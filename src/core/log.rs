use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{strip_ansi, truncate};
use ansi_term::Colour;
use serde::Serialize;

const OP_TARGET_MAX: usize = 60;

#[derive(Debug, Clone, Serialize)]
pub struct AuditRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "vacuum" => Colour::Cyan,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<AuditRow>> {
        let mut stmt = pool
            .conn
            .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(AuditRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// One line per audit row; only the operation word is coloured.
    pub fn render(entries: &[AuditRow], color: bool) -> String {
        if entries.is_empty() {
            return "No log entries.\n".to_string();
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                let joined = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate(&joined, OP_TARGET_MAX)
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (e, op_target) in entries.iter().zip(&op_targets) {
            let shown = if color {
                let c = color_for_operation(&e.operation);
                match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", c.paint(op), rest),
                    None => c.paint(op_target.as_str()).to_string(),
                }
            } else {
                op_target.clone()
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                e.id, e.date, shown, padding, e.message
            ));
        }
        out
    }
}
