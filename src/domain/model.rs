use serde::{Deserialize, Serialize};

/// 內容長度上限 (以字元計)
pub const MAX_CONTENT_LENGTH: usize = 500;

/// A blog-post-like record with a like/dislike counter pair.
///
/// The same shape doubles as an update payload: empty `title`/`content` mean
/// "leave unchanged" and the counters must stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn content_is_too_long(&self) -> bool {
        self.content.chars().count() > MAX_CONTENT_LENGTH
    }

    /// Whether this payload tries to set either vote counter.
    pub fn touches_votes(&self) -> bool {
        self.likes != 0 || self.dislikes != 0
    }
}
