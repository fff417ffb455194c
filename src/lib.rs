pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::sqlite::SqliteRepository;
pub use crate::config::PostsConfig;
pub use crate::core::{posts::PostService, Post};
pub use crate::utils::error::{PostError, RepositoryError, Result};
