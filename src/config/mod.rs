pub mod toml_config;

pub use toml_config::{DatabaseConfig, LoggingConfig, PostsConfig};
