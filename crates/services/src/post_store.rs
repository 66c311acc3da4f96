//! In-memory, most-recent-first collection of posts.

use std::collections::VecDeque;

use domains::{IdStrategy, Post, PostId, PostStatus, Section, ValidDraft};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PostStore {
    posts: VecDeque<Post>,
    strategy: IdStrategy,
    /// Highest id ever stored; only consulted by `IdStrategy::Monotonic`.
    high_water: PostId,
}

impl PostStore {
    pub fn new(seed: Vec<Post>, strategy: IdStrategy) -> Self {
        let high_water = seed.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            posts: seed.into(),
            strategy,
            high_water,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> + '_ {
        self.posts.iter()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// The id the next created post will receive.
    pub fn next_id(&self) -> PostId {
        match self.strategy {
            IdStrategy::LengthPlusOne => self.posts.len() as PostId + 1,
            IdStrategy::Monotonic => self.high_water + 1,
        }
    }

    /// Builds a post from `draft` and puts it at the front.
    pub fn create(&mut self, draft: ValidDraft, author: &str, timestamp: &str) -> &Post {
        let id = self.next_id();
        let (title, content, section) = draft.into_parts();
        self.high_water = self.high_water.max(id);
        self.posts.push_front(Post {
            id,
            title,
            content,
            author: author.to_string(),
            section,
            timestamp: timestamp.to_string(),
            likes: 0,
            comments: 0,
            is_pinned: false,
            status: PostStatus::Active,
        });
        debug!(id, %section, len = self.posts.len(), "post stored");
        &self.posts[0]
    }

    /// Removes every post carrying `id` and returns them in store order.
    /// Missing ids leave the store untouched.
    pub fn delete(&mut self, id: PostId) -> Vec<Post> {
        if !self.posts.iter().any(|p| p.id == id) {
            return Vec::new();
        }
        let (removed, kept): (VecDeque<Post>, VecDeque<Post>) = std::mem::take(&mut self.posts)
            .into_iter()
            .partition(|p| p.id == id);
        self.posts = kept;
        removed.into()
    }

    /// Posts of one section in collection order. Recomputed on every call.
    pub fn filter_by_section(&self, section: Section) -> impl Iterator<Item = &Post> + '_ {
        self.posts.iter().filter(move |p| p.section == section)
    }

    pub fn count_in(&self, section: Section) -> usize {
        self.filter_by_section(section).count()
    }

    pub fn pinned_count(&self) -> usize {
        self.posts.iter().filter(|p| p.is_pinned).count()
    }
}
