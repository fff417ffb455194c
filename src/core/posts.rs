//! Post operations layered over the repository capabilities.
//!
//! Every operation is stateless: it calls the repository, validates or merges
//! the payload, and reduces storage failures to `NotFound` or `Internal`.

use crate::domain::model::Post;
use crate::domain::ports::{
    PostDeleter, PostGetter, PostRepository, PostSaver, PostUpdater, PostsLister,
};
use crate::utils::error::{PostError, Result};

pub async fn get_all<L: PostsLister>(lister: &L) -> Result<Vec<Post>> {
    let posts = lister.list_posts().await.map_err(|e| {
        tracing::error!("Failed to list posts: {}", e);
        PostError::Internal
    })?;

    tracing::debug!("Listed {} posts", posts.len());
    Ok(posts)
}

pub async fn get_one<G: PostGetter>(getter: &G, id: i64) -> Result<Post> {
    let post = getter.get_post(id).await?;
    Ok(post)
}

/// Validates a new post, zeroes its counters and saves it.
///
/// Nothing is written when validation fails. The returned post carries the
/// id the repository assigned.
pub async fn create<S: PostSaver>(saver: &S, post: Post) -> Result<Post> {
    verify_new_post(&post).inspect_err(|e| tracing::warn!("Rejected new post: {}", e))?;

    let mut post = format_new_post(post);
    post.id = saver.save_post(&post).await.map_err(|e| {
        tracing::error!("Failed to save post: {}", e);
        PostError::Internal
    })?;

    tracing::debug!("Created post {}", post.id);
    Ok(post)
}

/// Deletes a post and returns the snapshot fetched before deletion.
pub async fn delete<G: PostGetter, D: PostDeleter>(getter: &G, deleter: &D, id: i64) -> Result<Post> {
    let post = get_one(getter, id).await?;

    deleter.delete_post(id).await?;

    tracing::debug!("Deleted post {}", id);
    Ok(post)
}

/// Merges `update_data` into the stored post.
///
/// Empty `title` or `content` leave the stored value unchanged. The vote
/// counters cannot be changed here, and the lookup runs before that check.
pub async fn update<G: PostGetter, U: PostUpdater>(
    getter: &G,
    updater: &U,
    id: i64,
    update_data: Post,
) -> Result<Post> {
    let original = getter.get_post(id).await?;

    if update_data.touches_votes() {
        tracing::warn!("Rejected update of post {}: vote counters are read-only", id);
        return Err(PostError::CantChangeLikes);
    }

    let post = merge_fields(original, update_data);
    if post.content_is_too_long() {
        tracing::warn!("Rejected update of post {}: content too long", id);
        return Err(PostError::TooLong);
    }

    updater.update_post(id, &post).await?;

    tracing::debug!("Updated post {}", id);
    Ok(post)
}

fn verify_new_post(post: &Post) -> Result<()> {
    if !post.has_title() {
        return Err(PostError::NeedsTitle);
    }
    if post.content_is_too_long() {
        return Err(PostError::TooLong);
    }
    Ok(())
}

fn format_new_post(mut post: Post) -> Post {
    post.likes = 0;
    post.dislikes = 0;
    post
}

fn merge_fields(mut original: Post, update_data: Post) -> Post {
    if !update_data.title.is_empty() {
        original.title = update_data.title;
    }
    if !update_data.content.is_empty() {
        original.content = update_data.content;
    }
    original
}

/// Holds one repository and exposes the post operations as methods.
pub struct PostService<R: PostRepository> {
    repository: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn get_all(&self) -> Result<Vec<Post>> {
        get_all(&self.repository).await
    }

    pub async fn get_one(&self, id: i64) -> Result<Post> {
        get_one(&self.repository, id).await
    }

    pub async fn create(&self, post: Post) -> Result<Post> {
        create(&self.repository, post).await
    }

    pub async fn delete(&self, id: i64) -> Result<Post> {
        delete(&self.repository, &self.repository, id).await
    }

    pub async fn update(&self, id: i64, update_data: Post) -> Result<Post> {
        update(&self.repository, &self.repository, id, update_data).await
    }
}
