use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::models::{Post, Section};

/// The tab currently shown. `Admin` has no posts of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    News,
    Rules,
    Support,
    Admin,
}

impl Tab {
    /// The post section this tab lists, if any.
    pub fn section(self) -> Option<Section> {
        match self {
            Tab::News => Some(Section::News),
            Tab::Rules => Some(Section::Rules),
            Tab::Support => Some(Section::Support),
            Tab::Admin => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::News => "news",
            Tab::Rules => "rules",
            Tab::Support => "support",
            Tab::Admin => "admin",
        }
    }
}

impl From<Section> for Tab {
    fn from(section: Section) -> Self {
        match section {
            Section::News => Tab::News,
            Section::Rules => Tab::Rules,
            Section::Support => Tab::Support,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Tab::Admin),
            other => other
                .parse::<Section>()
                .map(Tab::from)
                .map_err(|_| DomainError::Parse {
                    kind: "tab",
                    value: s.trim().to_string(),
                }),
        }
    }
}

/// Which admin dialog is open.
///
/// The delete target is carried by the `Delete` variant itself, so a
/// selected post without a pending delete cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdminAction {
    #[default]
    None,
    Delete {
        post: Post,
    },
    Ban,
    Filter,
}

/// Payload-free tag of an [`AdminAction`], for logging and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminActionKind {
    None,
    Delete,
    Ban,
    Filter,
}

impl fmt::Display for AdminActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdminActionKind::None => "none",
            AdminActionKind::Delete => "delete",
            AdminActionKind::Ban => "ban",
            AdminActionKind::Filter => "filter",
        })
    }
}

impl AdminAction {
    pub fn kind(&self) -> AdminActionKind {
        match self {
            AdminAction::None => AdminActionKind::None,
            AdminAction::Delete { .. } => AdminActionKind::Delete,
            AdminAction::Ban => AdminActionKind::Ban,
            AdminAction::Filter => AdminActionKind::Filter,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AdminAction::None)
    }

    pub fn selected_post(&self) -> Option<&Post> {
        match self {
            AdminAction::Delete { post } => Some(post),
            _ => None,
        }
    }
}
