//! Repository capabilities, one per storage operation.
//!
//! Each service operation asks only for the capabilities it uses, so test
//! doubles can implement a subset while production storage implements all
//! five on a single type.

use crate::domain::model::Post;
use crate::utils::error::RepositoryError;
use std::future::Future;

pub trait PostsLister: Send + Sync {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, RepositoryError>> + Send;
}

pub trait PostGetter: Send + Sync {
    /// Returns `RepositoryError::NotFound` when no post has this id.
    fn get_post(&self, id: i64) -> impl Future<Output = Result<Post, RepositoryError>> + Send;
}

pub trait PostSaver: Send + Sync {
    /// Stores a new post and returns the id the storage assigned to it.
    fn save_post(&self, post: &Post) -> impl Future<Output = Result<i64, RepositoryError>> + Send;
}

pub trait PostDeleter: Send + Sync {
    fn delete_post(&self, id: i64) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

pub trait PostUpdater: Send + Sync {
    fn update_post(
        &self,
        id: i64,
        post: &Post,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Everything a full storage backend provides.
pub trait PostRepository: PostsLister + PostGetter + PostSaver + PostDeleter + PostUpdater {}

impl<T> PostRepository for T where T: PostsLister + PostGetter + PostSaver + PostDeleter + PostUpdater {}
