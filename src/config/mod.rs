use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, UserAccount};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,
    #[serde(default = "default_users")]
    pub users: Vec<UserAccount>,
    #[serde(default = "default_max_hours")]
    pub max_hours_per_entry: f64,
    #[serde(default = "default_hours_step")]
    pub hours_step: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_projects() -> Vec<String> {
    [
        "Website Redesign",
        "Mobile App Development",
        "API Integration",
        "Database Migration",
        "Security Audit",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}
fn default_users() -> Vec<UserAccount> {
    vec![
        UserAccount::new("1", "john.contractor", "John Smith", Role::Contractor),
        UserAccount::new("2", "sarah.contractor", "Sarah Johnson", Role::Contractor),
        UserAccount::new("3", "admin", "Admin User", Role::Admin),
    ]
}
fn default_max_hours() -> f64 {
    24.0
}
fn default_hours_step() -> f64 {
    0.5
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            projects: default_projects(),
            users: default_users(),
            max_hours_per_entry: default_max_hours(),
            hours_step: default_hours_step(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Reject settings that would make every submission fail.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_hours_per_entry <= 0.0 {
            return Err(AppError::Config(
                "max_hours_per_entry must be greater than 0".into(),
            ));
        }
        if self.hours_step < 0.0 {
            return Err(AppError::Config("hours_step cannot be negative".into()));
        }
        let mut seen = std::collections::HashSet::new();
        for u in &self.users {
            if !seen.insert(u.username.to_lowercase()) {
                return Err(AppError::Config(format!(
                    "duplicate username '{}' in users",
                    u.username
                )));
            }
        }
        Ok(())
    }

    /// Case-insensitive account lookup used by `login`.
    pub fn find_user(&self, username: &str) -> Option<&UserAccount> {
        let wanted = username.trim();
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(wanted))
    }

    /// Initialize configuration and database files.
    /// Returns the database path written in the configuration.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("rtimesheet.sqlite"),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
