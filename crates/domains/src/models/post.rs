use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub type PostId = u64;

/// Forum section a post belongs to. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Rules,
    Support,
    #[default]
    News,
}

impl Section {
    /// Tab order of the page header.
    pub const ALL: [Section; 3] = [Section::News, Section::Rules, Section::Support];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Rules => "rules",
            Section::Support => "support",
            Section::News => "news",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" => Ok(Section::Rules),
            "support" => Ok(Section::Support),
            "news" => Ok(Section::News),
            _ => Err(DomainError::Parse {
                kind: "section",
                value: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Active,
    Banned,
}

/// The fundamental unit of the forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub section: Section,
    /// Display string, not a clock value ("2 days ago", "just now").
    pub timestamp: String,
    /// Like and comment counters are display-only; nothing increments them.
    pub likes: u32,
    pub comments: u32,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub status: PostStatus,
}

/// How a new post's id is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `id = number of stored posts + 1`. Can hand out an id that is still
    /// in use once a post other than the newest has been deleted.
    #[default]
    LengthPlusOne,
    /// One more than the highest id ever stored. Never collides.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "length_plus_one" => Ok(IdStrategy::LengthPlusOne),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => Err(DomainError::Parse {
                kind: "id strategy",
                value: other.to_string(),
            }),
        }
    }
}
