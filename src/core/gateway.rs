//! Create/list/update/delete for one record kind.
//!
//! The gateway turns typed drafts and patches into storage rows and rows
//! back into records. Every failure comes back as a [`GatewayError`];
//! callers that want the tagged `{ success, data, error }` shape convert the
//! result into an [`Outcome`].

use crate::core::filter::Criteria;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{GatewayError, GatewayResult};
use crate::models::record::Record;
use serde::Serialize;
use std::marker::PhantomData;

pub struct Gateway<'a, R: Record> {
    pool: &'a DbPool,
    _kind: PhantomData<R>,
}

impl<'a, R: Record> Gateway<'a, R> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    /// Store a new record. Storage assigns the id and both timestamps.
    pub fn create(&self, draft: &R::Draft) -> GatewayResult<R> {
        let result = self.try_create(draft);
        log_failure::<R, _>("saving", &result);
        result
    }

    fn try_create(&self, draft: &R::Draft) -> GatewayResult<R> {
        let conn = &self.pool.conn;
        let id = store::insert_row(conn, R::TABLE, R::draft_columns(draft))?;
        let stored = self.fetch(&id)?;

        self.audit("add", &id, &format!("Created {}", R::KIND));
        Ok(stored)
    }

    /// Every record matching `criteria`, newest first. No pagination.
    pub fn list(&self, criteria: &Criteria) -> GatewayResult<Vec<R>> {
        let result = self.try_list(criteria);
        log_failure::<R, _>("fetching", &result);
        result
    }

    fn try_list(&self, criteria: &Criteria) -> GatewayResult<Vec<R>> {
        if let Some(bad) = criteria.columns().into_iter().find(|c| !R::is_column(c)) {
            return Err(GatewayError::Persistence(format!(
                "column {}.{} does not exist",
                R::TABLE,
                bad
            )));
        }

        let query = criteria.to_query();
        let rows = store::select_rows(&self.pool.conn, R::TABLE, &query, |row| R::from_row(row))?;
        Ok(rows)
    }

    /// Single record by id.
    pub fn get(&self, id: &str) -> GatewayResult<R> {
        let result = self.fetch(id);
        log_failure::<R, _>("fetching", &result);
        result
    }

    fn fetch(&self, id: &str) -> GatewayResult<R> {
        store::select_by_id(&self.pool.conn, R::TABLE, id, |row| R::from_row(row))?
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    /// Write the fields present in `patch`; everything else is untouched.
    pub fn update(&self, id: &str, patch: &R::Patch) -> GatewayResult<R> {
        let result = self.try_update(id, patch);
        log_failure::<R, _>("updating", &result);
        result
    }

    fn try_update(&self, id: &str, patch: &R::Patch) -> GatewayResult<R> {
        let columns = R::patch_columns(patch);
        let fields = columns
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");

        let changed = store::update_row(&self.pool.conn, R::TABLE, id, columns)?;
        if changed == 0 {
            return Err(GatewayError::NotFound(id.to_string()));
        }

        let stored = self.fetch(id)?;
        self.audit("edit", id, &format!("Updated {} [{}]", R::KIND, fields));
        Ok(stored)
    }

    /// Remove a record. A missing id is reported as success: storage does
    /// not signal "not found" on delete.
    pub fn delete(&self, id: &str) -> GatewayResult<()> {
        let result = store::delete_row(&self.pool.conn, R::TABLE, id)
            .map_err(GatewayError::from)
            .map(|removed| {
                if removed == 0 {
                    tracing::debug!(table = R::TABLE, id, "delete matched no row");
                } else {
                    self.audit("del", id, &format!("Deleted {}", R::KIND));
                }
            });
        log_failure::<R, _>("deleting", &result);
        result
    }

    /// Audit lines are best effort and never fail the operation.
    fn audit(&self, operation: &str, id: &str, message: &str) {
        if let Err(e) = audit(&self.pool.conn, operation, id, message) {
            tracing::warn!(error = %e, "failed to write audit log");
        }
    }
}

fn log_failure<R: Record, T>(action: &str, result: &GatewayResult<T>) {
    match result {
        Err(GatewayError::Persistence(msg)) => {
            tracing::error!(table = R::TABLE, "Error {} {}: {}", action, R::KIND, msg)
        }
        Err(GatewayError::NotFound(id)) => {
            tracing::debug!(table = R::TABLE, id = %id, "{} not found", R::KIND)
        }
        Ok(_) => {}
    }
}

/// Non-throwing tagged result: callers inspect `success` instead of
/// matching on an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub not_found: bool,
}

impl<T> From<GatewayResult<T>> for Outcome<T> {
    fn from(result: GatewayResult<T>) -> Self {
        match result {
            Ok(data) => Outcome {
                success: true,
                data: Some(data),
                error: None,
                not_found: false,
            },
            Err(e) => Outcome {
                success: false,
                data: None,
                not_found: matches!(e, GatewayError::NotFound(_)),
                error: Some(e.to_string()),
            },
        }
    }
}
