use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// chrono format used for presentation dates (tables, exports).
    #[serde(default = "default_short_date_format")]
    pub short_date_format: String,
    /// Directory for exports when `--file` is not given. Empty = current dir.
    #[serde(default)]
    pub export_dir: String,
    /// Max visible width of free-text columns in list tables.
    #[serde(default = "default_notes_width")]
    pub notes_width: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

pub(crate) fn default_short_date_format() -> String {
    "%d/%m/%Y".to_string()
}

pub(crate) fn default_notes_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            short_date_format: default_short_date_format(),
            export_dir: String::new(),
            notes_width: default_notes_width(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("itlogbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".itlogbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("itlogbook.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("itlogbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    /// Directory exports land in when no explicit file is given.
    pub fn export_dir(&self) -> PathBuf {
        if self.export_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            crate::utils::path::expand_tilde(&self.export_dir)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path that was set up. In test mode the config
    /// file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => crate::utils::path::expand_tilde(name),
            None => dir.join("itlogbook.sqlite"),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
