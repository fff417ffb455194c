use crate::utils::error::ConfigError;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PostsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let processed_content = substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }
}

/// 替換環境變數 (例如 ${DATABASE_URL})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl Validate for PostsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.logging.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_database_url("database.url", &self.url)?;
        validation::validate_range("database.max_connections", self.max_connections, 1, 100)
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_one_of("logging.level", &self.level, &LOG_LEVELS)
    }
}
