use thiserror::Error;

/// Outcomes of the post service. Storage detail never leaks past `Internal`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("post not found")]
    NotFound,

    #[error("internal error")]
    Internal,

    #[error("title is required")]
    NeedsTitle,

    #[error("content must be less than 500 characters")]
    TooLong,

    #[error("likes cant be changed")]
    CantChangeLikes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 查無資料
    Lookup,
    /// 呼叫端輸入不合法
    Validation,
    /// 儲存層發生非預期錯誤
    Storage,
}

impl PostError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PostError::NotFound => ErrorCategory::Lookup,
            PostError::Internal => ErrorCategory::Storage,
            PostError::NeedsTitle | PostError::TooLong | PostError::CantChangeLikes => {
                ErrorCategory::Validation
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// Errors reported by a repository implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("post not found")]
    NotFound,

    #[error("query error: {0}")]
    Query(String),

    #[error("database connection error: {0}")]
    Connection(String),
}

impl From<RepositoryError> for PostError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => PostError::NotFound,
            other => {
                tracing::error!("Repository failure collapsed to internal error: {}", other);
                PostError::Internal
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PostError>;
