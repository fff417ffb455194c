pub mod posts;

pub use crate::domain::model::{Post, MAX_CONTENT_LENGTH};
pub use crate::domain::ports::{
    PostDeleter, PostGetter, PostRepository, PostSaver, PostUpdater, PostsLister,
};
pub use crate::utils::error::{PostError, RepositoryError, Result};
pub use posts::PostService;
