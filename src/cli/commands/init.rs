use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Create the config file (outside test mode), the database file and its
/// schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing itlogbook…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {db_str}");

    let pool = DbPool::new(&db_str)?;
    let applied = init_db(&pool.conn)?;

    success(format!(
        "Database initialized at {db_str} ({applied} migration(s) applied)"
    ));

    if let Err(e) = audit(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {db_str}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    Ok(())
}
