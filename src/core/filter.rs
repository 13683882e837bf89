//! Filter criteria shared by in-memory filtering and database queries.
//!
//! A [`Criteria`] is a conjunction of [`Condition`]s. The same value can be
//! evaluated against records already in memory ([`Criteria::matches`]) or
//! turned into a `WHERE` clause ([`Criteria::to_query`]); both backends must
//! agree on every dataset.

use crate::core::date_norm::to_wire_date;
use crate::models::backup_log::Shift;
use crate::models::logbook_entry::Status;
use crate::models::record::{FieldValue, Record};
use chrono::NaiveDate;
use rusqlite::types::Value;

/// Inclusive date interval; an absent bound is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.from.is_none_or(|f| d >= f) && self.to.is_none_or(|t| d <= t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Exact match on the stored (wire) representation.
    Equals { column: String, value: String },
    /// ASCII case-insensitive substring match against any of `columns`.
    Search {
        columns: Vec<&'static str>,
        text: String,
    },
    DateBetween {
        column: &'static str,
        range: DateRange,
    },
}

impl Condition {
    pub fn column_names(&self) -> Vec<&str> {
        match self {
            Condition::Equals { column, .. } => vec![column.as_str()],
            Condition::Search { columns, .. } => columns.clone(),
            Condition::DateBetween { column, .. } => vec![*column],
        }
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            Condition::Equals { column, value } => match record.field(column) {
                FieldValue::Text(s) => s == value.as_str(),
                FieldValue::Date(d) => to_wire_date(d) == *value,
                FieldValue::Missing => false,
            },
            Condition::Search { columns, text } => {
                let needle = text.to_ascii_lowercase();
                columns.iter().any(|c| match record.field(c) {
                    FieldValue::Text(s) => s.to_ascii_lowercase().contains(&needle),
                    _ => false,
                })
            }
            Condition::DateBetween { column, range } => match record.field(column) {
                FieldValue::Date(d) => range.contains(d),
                _ => false,
            },
        }
    }

    fn push_sql(&self, q: &mut QueryFragment) {
        match self {
            Condition::Equals { column, value } => {
                q.clauses.push(format!("{column} = ?"));
                q.params.push(Value::Text(value.clone()));
            }
            Condition::Search { columns, text } => {
                let pattern = format!("%{}%", escape_like(text));
                let ors = columns
                    .iter()
                    .map(|c| format!("{c} LIKE ? ESCAPE '\\'"))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                q.clauses.push(format!("({ors})"));
                for _ in columns {
                    q.params.push(Value::Text(pattern.clone()));
                }
            }
            Condition::DateBetween { column, range } => {
                if let Some(from) = range.from {
                    q.clauses.push(format!("{column} >= ?"));
                    q.params.push(Value::Text(to_wire_date(from)));
                }
                if let Some(to) = range.to {
                    q.clauses.push(format!("{column} <= ?"));
                    q.params.push(Value::Text(to_wire_date(to)));
                }
            }
        }
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A `WHERE` clause body plus its positional parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFragment {
    pub clauses: Vec<String>,
    pub params: Vec<Value>,
}

impl QueryFragment {
    /// `""` when unconstrained, otherwise `" WHERE a AND b"`.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    conditions: Vec<Condition>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain field → value exact matches. Empty values are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut c = Self::new();
        for (k, v) in pairs {
            c = c.equals(k, v);
        }
        c
    }

    pub fn equals(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.conditions.push(Condition::Equals {
                column: column.into(),
                value,
            });
        }
        self
    }

    pub fn search(mut self, columns: &[&'static str], text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() && !columns.is_empty() {
            self.conditions.push(Condition::Search {
                columns: columns.to_vec(),
                text: text.to_string(),
            });
        }
        self
    }

    pub fn date_between(mut self, column: &'static str, range: DateRange) -> Self {
        if !range.is_open() {
            self.conditions.push(Condition::DateBetween { column, range });
        }
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Every column any condition refers to.
    pub fn columns(&self) -> Vec<&str> {
        self.conditions
            .iter()
            .flat_map(|c| c.column_names())
            .collect()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }

    pub fn apply<R: Record + Clone>(&self, records: &[R]) -> Vec<R> {
        records
            .iter()
            .filter(|r| self.matches(*r))
            .cloned()
            .collect()
    }

    pub fn to_query(&self) -> QueryFragment {
        let mut q = QueryFragment::default();
        for c in &self.conditions {
            c.push_sql(&mut q);
        }
        q
    }
}

/// A value meaning "no constraint": empty, `all`, or an `all-…` sentinel.
pub fn is_all_sentinel(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case("all") || v.to_ascii_lowercase().starts_with("all-")
}

/// Filters offered on the logbook views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogbookFilter {
    pub search: String,
    pub status: String,
    pub department: String,
    pub date_range: DateRange,
}

impl Default for LogbookFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all-statuses".to_string(),
            department: "all-departments".to_string(),
            date_range: DateRange::default(),
        }
    }
}

impl LogbookFilter {
    pub const SEARCH_COLUMNS: &'static [&'static str] = &[
        "jenis_pekerjaan",
        "department",
        "pic",
        "keterangan",
        "nomor_pr",
    ];

    pub fn to_criteria(&self) -> Criteria {
        let mut c = Criteria::new().search(Self::SEARCH_COLUMNS, &self.search);

        if !is_all_sentinel(&self.status) {
            // "in progress", "IN_PROGRESS" and friends all mean the stored value
            let status = Status::from_input(&self.status)
                .map(|s| s.to_db_str().to_string())
                .unwrap_or_else(|| self.status.trim().to_string());
            c = c.equals("status", status);
        }
        if !is_all_sentinel(&self.department) {
            c = c.equals("department", self.department.trim());
        }

        c.date_between("tanggal_mulai", self.date_range)
    }
}

/// Filters offered on the backup-log view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupLogFilter {
    pub shift: String,
    pub pic: String,
    pub date_range: DateRange,
}

impl BackupLogFilter {
    pub fn to_criteria(&self) -> Criteria {
        let mut c = Criteria::new();

        if !is_all_sentinel(&self.shift) {
            let shift = Shift::from_input(&self.shift)
                .map(|s| s.to_db_str().to_string())
                .unwrap_or_else(|| self.shift.trim().to_string());
            c = c.equals("shift", shift);
        }

        c.search(&["pic"], &self.pic)
            .date_between("tanggal", self.date_range)
    }
}
