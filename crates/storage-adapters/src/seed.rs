//! Fixture data the page mounts with.

use std::collections::HashSet;

use domains::{Post, User};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DEFAULT_SEED: &str = include_str!("../fixtures/seed.json");

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("malformed seed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Seed posts must start with distinct ids; only runtime creation may collide.
    #[error("duplicate post id {0} in seed")]
    DuplicatePostId(u64),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Seed {
    /// Parses a seed document of the form `{ "posts": [...], "users": [...] }`.
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        if let Some(dup) = seed.posts.iter().find(|p| !seen.insert(p.id)) {
            return Err(SeedError::DuplicatePostId(dup.id));
        }
        debug!(posts = seed.posts.len(), users = seed.users.len(), "seed parsed");
        Ok(seed)
    }

    /// The bundled fixture: three posts and three users, one of them banned.
    pub fn load_default() -> Result<Self, SeedError> {
        Self::from_json(DEFAULT_SEED)
    }
}
