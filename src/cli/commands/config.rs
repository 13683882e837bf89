use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{yaml}");
    }

    if *check {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use). Run `itlogbook init`.",
                path.display()
            ));
        } else {
            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }
    }

    if *migrate {
        if !path.exists() {
            warning(format!("No configuration file at {}.", path.display()));
        } else {
            let added = fill_missing_keys(&path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }
    }

    if *edit_config {
        edit(&path, editor.as_deref());
    }

    Ok(())
}

/// Open the config in the requested editor, falling back to the platform
/// default when that fails.
fn edit(path: &std::path::Path, requested: Option<&str>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor = requested.unwrap_or(&default_editor);

    let ok = |name: &str| {
        Command::new(name)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    };

    if ok(editor) {
        success(format!("Configuration file edited using '{editor}'"));
        return;
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{default_editor}'"
    ));

    if ok(&default_editor) {
        success(format!(
            "Configuration file edited using fallback '{default_editor}'"
        ));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{default_editor}'"
        ));
    }
}
