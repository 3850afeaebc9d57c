use crate::errors::{AppError, AppResult};
use crate::models::hours_minutes::HoursMinutesFormat;
use crate::models::starting_point::TimeIntervalStartingPoint;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: &[&str] = &[
    "database",
    "hide_registered_time",
    "confirm_clock_out",
    "time_summary",
    "time_report_summary_format",
    "max_interval_hours",
    "show_ongoing_status",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub hide_registered_time: bool,
    #[serde(default = "default_true")]
    pub confirm_clock_out: bool,
    /// day | week | month, see `starting_point()`.
    #[serde(default = "default_time_summary")]
    pub time_summary: String,
    #[serde(default)]
    pub time_report_summary_format: HoursMinutesFormat,
    #[serde(default = "default_max_interval_hours")]
    pub max_interval_hours: i64,
    #[serde(default = "default_true")]
    pub show_ongoing_status: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_true() -> bool {
    true
}
fn default_time_summary() -> String {
    TimeIntervalStartingPoint::Month.as_str().to_string()
}
fn default_max_interval_hours() -> i64 {
    24
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            hide_registered_time: false,
            confirm_clock_out: true,
            time_summary: default_time_summary(),
            time_report_summary_format: HoursMinutesFormat::Digital,
            max_interval_hours: default_max_interval_hours(),
            show_ongoing_status: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Configured starting point; unknown values fall back to the month.
    pub fn starting_point(&self) -> TimeIntervalStartingPoint {
        self.time_summary.parse().unwrap_or_else(|e: AppError| {
            tracing::warn!(value = %self.time_summary, error = %e, "falling back to month");
            TimeIntervalStartingPoint::Month
        })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
