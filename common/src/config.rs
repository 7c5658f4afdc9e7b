use once_cell::sync::OnceCell;
use std::{env, fs};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub database_name: String,
    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let config = Config::from_vars(|key| env::var(key).ok());

            if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
                let _ = fs::create_dir_all(parent);
            }

            config
        })
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_name = lookup("PROJECT_NAME").unwrap_or_else(|| "e-learning-seeder".into());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".into());
        let log_file = lookup("LOG_FILE").unwrap_or_else(|| "logs/seeder.log".into());
        let log_to_stdout = lookup("LOG_TO_STDOUT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "mongodb://localhost:27017/".into());
        let database_name = lookup("DATABASE_NAME").unwrap_or_else(|| "e-learning".into());
        let seed = lookup("SEED").and_then(|s| s.trim().parse().ok());

        Config {
            project_name,
            log_level,
            log_file,
            log_to_stdout,
            database_url,
            database_name,
            seed,
        }
    }
}
