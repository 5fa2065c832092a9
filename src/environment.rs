use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
///
/// # Returns
/// - `Vec<String>` with surrounding whitespace trimmed and empty entries dropped.
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Vec<String> {
    split_list(&env::var(var).unwrap_or_default(), delimiter)
}

fn split_list(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Server settings. None of these affect what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_dir: PathBuf,
    /// Optional JSON file replacing the built-in topic catalogue.
    pub topics_path: Option<PathBuf>,
    /// Allowed browser origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            topics_path: None,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `LOG_DIR`, `TOPICS_PATH` and `CORS_ORIGINS`,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            topics_path: env::var("TOPICS_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cors_origins: get_env_var_as_vec("CORS_ORIGINS", ';'),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
