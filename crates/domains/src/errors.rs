//! # DomainError
//!
//! Failures the forum core can report. There is no I/O below this layer,
//! so the taxonomy stays small.

use thiserror::Error;

use crate::models::{AdminActionKind, PostId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A draft was submitted with an empty (or whitespace-only) field.
    #[error("validation error: {0}")]
    Validation(String),

    /// Another admin dialog is already open. Active actions never chain
    /// into each other without going back to `none`.
    #[error("admin action `{pending}` is pending; cancel it before requesting `{requested}`")]
    AdminActionPending {
        pending: AdminActionKind,
        requested: AdminActionKind,
    },

    /// A delete was requested for a post that is not in the store.
    #[error("post not found with ID {0}")]
    UnknownPost(PostId),

    /// A textual value did not name a member of a closed enumeration.
    #[error("unknown {kind}: {value:?}")]
    Parse { kind: &'static str, value: String },
}

/// A specialized Result type for forum core logic.
pub type Result<T> = std::result::Result<T, DomainError>;
