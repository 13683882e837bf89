use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{collect_db_info, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::print_json;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        println!("{CYAN}▶ Running migrations…{RESET}");
        let applied = run_pending_migrations(&pool.conn)?;
        println!("{GREEN}✔ Migration completed ({applied} applied).{RESET}\n");
    }

    if *info {
        let stats = collect_db_info(&pool, &cfg.database)?;
        if json {
            print_json(&stats)?;
        } else {
            print_db_info(&stats);
        }
    }

    if *check {
        println!("{CYAN}▶ Running integrity check…{RESET}");

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{GREEN}✔ Integrity check passed.{RESET}\n");
        } else {
            println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
        }
    }

    if *vacuum {
        println!("{CYAN}▶ Running VACUUM…{RESET}");
        pool.conn.execute_batch("VACUUM;")?;
        if let Err(e) = audit(&pool.conn, "vacuum", "database", "Database compacted") {
            tracing::warn!(error = %e, "failed to write audit log");
        }
        println!("{GREEN}✔ Vacuum completed.{RESET}\n");
    }

    Ok(())
}
