//! Per-view application state.
//!
//! A context is mounted when a view command starts and dropped when it
//! returns. Nothing outlives it; there is no global state.

use crate::config::Config;
use crate::core::gateway::Gateway;
use crate::core::table::CellOptions;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::Record;

pub struct AppContext {
    pub cfg: Config,
    pub pool: DbPool,
    /// Print tagged outcomes as JSON instead of tables/messages.
    pub json: bool,
}

impl AppContext {
    /// Open the configured database and bring its schema up to date.
    pub fn mount(cfg: &Config, json: bool) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        Self::with_pool(cfg, pool, json)
    }

    pub fn with_pool(cfg: &Config, pool: DbPool, json: bool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        tracing::debug!(database = %cfg.database, "view mounted");
        Ok(Self {
            cfg: cfg.clone(),
            pool,
            json,
        })
    }

    pub fn gateway<R: Record>(&self) -> Gateway<'_, R> {
        Gateway::new(&self.pool)
    }

    pub fn cell_options(&self) -> CellOptions {
        CellOptions {
            date_format: self.cfg.short_date_format.clone(),
            text_width: self.cfg.notes_width,
            color: !self.json,
        }
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        tracing::debug!(database = %self.cfg.database, "view unmounted");
    }
}
