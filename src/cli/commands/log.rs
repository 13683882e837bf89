use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::print_json;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let rows = LogLogic::load(&pool)?;
        if json {
            print_json(&rows)?;
        } else {
            println!("📜 Internal log:\n");
            print!("{}", LogLogic::render(&rows, true));
        }
    }

    Ok(())
}
