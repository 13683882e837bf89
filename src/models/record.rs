//! Behaviour shared by every stored record kind.

use crate::db::store::Columns;
use chrono::NaiveDate;
use rusqlite::Row;

/// A field value as seen by filters and sorting, with its natural type.
///
/// Variant order is significant: `Missing` sorts before any present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    pub fn text(s: &'a str) -> Self {
        FieldValue::Text(s)
    }

    pub fn optional_text(s: Option<&'a str>) -> Self {
        s.map(FieldValue::Text).unwrap_or(FieldValue::Missing)
    }

    pub fn optional_date(d: Option<NaiveDate>) -> Self {
        d.map(FieldValue::Date).unwrap_or(FieldValue::Missing)
    }
}

/// A row kind stored in its own table and handled by the record gateway.
pub trait Record: Sized {
    /// Storage table.
    const TABLE: &'static str;
    /// Human name used in messages ("logbook entry").
    const KIND: &'static str;
    /// Caller-visible columns (everything but the storage-managed ones).
    const COLUMNS: &'static [&'static str];

    /// Input for `create`; carries no id or timestamps.
    type Draft;
    /// Input for `update`; only present fields are written.
    type Patch;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn draft_columns(draft: &Self::Draft) -> Columns;

    fn patch_columns(patch: &Self::Patch) -> Columns;

    fn id(&self) -> &str;

    fn field(&self, column: &str) -> FieldValue<'_>;

    fn is_column(name: &str) -> bool {
        name == "id"
            || name == "created_at"
            || name == "updated_at"
            || Self::COLUMNS.contains(&name)
    }
}

/// Read a wire date column, reporting a conversion failure for bad text.
pub(crate) fn date_column(row: &Row<'_>, column: &str) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(column)?;
    parse_date_text(&raw)
}

pub(crate) fn optional_date_column(
    row: &Row<'_>,
    column: &str,
) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(column)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date_text(s).map(Some),
    }
}

fn parse_date_text(raw: &str) -> rusqlite::Result<NaiveDate> {
    crate::core::date_norm::parse_wire_date(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Decode an enum column through its `from_db_str`.
pub(crate) fn enum_column<T>(
    row: &Row<'_>,
    column: &str,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(column)?;
    parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("Invalid {column}: {raw}").into(),
        )
    })
}
