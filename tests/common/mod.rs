#![allow(dead_code)]

use posts_service::core::{
    Post, PostDeleter, PostGetter, PostSaver, PostUpdater, PostsLister, RepositoryError,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn example_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Post 1".to_string(),
            content: "Content of Post 1".to_string(),
            likes: 2,
            dislikes: 1,
        },
        Post {
            id: 2,
            title: "Post 2".to_string(),
            content: "Content of Post 2".to_string(),
            likes: 5,
            dislikes: 2,
        },
        Post {
            id: 3,
            title: "Post 3".to_string(),
            content: "Content of Post 3".to_string(),
            likes: 0,
            dislikes: 10,
        },
    ]
}

/// Working in-memory repository that also records every mutating call.
#[derive(Clone, Default)]
pub struct GoodRepository {
    posts: Arc<Mutex<BTreeMap<i64, Post>>>,
    pub saved: Arc<Mutex<Vec<Post>>>,
    pub updated: Arc<Mutex<Vec<(i64, Post)>>>,
    pub deleted: Arc<Mutex<Vec<i64>>>,
}

impl GoodRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        let repo = Self::default();
        {
            let mut stored = repo.posts.try_lock().unwrap();
            for post in posts {
                stored.insert(post.id, post);
            }
        }
        repo
    }

    pub fn with_examples() -> Self {
        Self::new(example_posts())
    }

    pub async fn stored(&self, id: i64) -> Option<Post> {
        self.posts.lock().await.get(&id).cloned()
    }

    pub async fn saved_posts(&self) -> Vec<Post> {
        self.saved.lock().await.clone()
    }

    pub async fn updated_posts(&self) -> Vec<(i64, Post)> {
        self.updated.lock().await.clone()
    }

    pub async fn deleted_ids(&self) -> Vec<i64> {
        self.deleted.lock().await.clone()
    }
}

impl PostsLister for GoodRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepositoryError> {
        Ok(self.posts.lock().await.values().cloned().collect())
    }
}

impl PostGetter for GoodRepository {
    async fn get_post(&self, id: i64) -> Result<Post, RepositoryError> {
        self.stored(id).await.ok_or(RepositoryError::NotFound)
    }
}

impl PostSaver for GoodRepository {
    async fn save_post(&self, post: &Post) -> Result<i64, RepositoryError> {
        let mut posts = self.posts.lock().await;
        let id = posts.keys().next_back().copied().unwrap_or(0) + 1;

        let mut stored = post.clone();
        stored.id = id;
        posts.insert(id, stored);

        self.saved.lock().await.push(post.clone());
        Ok(id)
    }
}

impl PostDeleter for GoodRepository {
    async fn delete_post(&self, id: i64) -> Result<(), RepositoryError> {
        if self.posts.lock().await.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        self.deleted.lock().await.push(id);
        Ok(())
    }
}

impl PostUpdater for GoodRepository {
    async fn update_post(&self, id: i64, post: &Post) -> Result<(), RepositoryError> {
        let mut posts = self.posts.lock().await;
        match posts.get_mut(&id) {
            Some(stored) => *stored = post.clone(),
            None => return Err(RepositoryError::NotFound),
        }
        self.updated.lock().await.push((id, post.clone()));
        Ok(())
    }
}

pub fn bad_error() -> RepositoryError {
    RepositoryError::Query("something bad went wrong".to_string())
}

/// Returns the same obscure error from every method.
#[derive(Clone, Copy, Default)]
pub struct BadRepository;

impl PostsLister for BadRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepositoryError> {
        Err(bad_error())
    }
}

impl PostGetter for BadRepository {
    async fn get_post(&self, _id: i64) -> Result<Post, RepositoryError> {
        Err(bad_error())
    }
}

impl PostSaver for BadRepository {
    async fn save_post(&self, _post: &Post) -> Result<i64, RepositoryError> {
        Err(bad_error())
    }
}

impl PostDeleter for BadRepository {
    async fn delete_post(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(bad_error())
    }
}

impl PostUpdater for BadRepository {
    async fn update_post(&self, _id: i64, _post: &Post) -> Result<(), RepositoryError> {
        Err(bad_error())
    }
}

/// Deleter that fails with a fixed error and counts how often it was called.
#[derive(Default)]
pub struct CountingDeleter {
    pub error: Option<RepositoryError>,
    pub calls: AtomicUsize,
}

impl CountingDeleter {
    pub fn failing_with(error: RepositoryError) -> Self {
        Self {
            error: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostDeleter for CountingDeleter {
    async fn delete_post(&self, _id: i64) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
