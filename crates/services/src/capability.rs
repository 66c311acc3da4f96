//! Admin capability token.
//!
//! Granted once when a [`ForumPage`](crate::ForumPage) session starts, and
//! only if the session was opened with the admin flag. Admin-only
//! operations take it by reference; code without the token has no way to
//! reach them.

/// Proof that the current session belongs to an administrator.
#[derive(Debug)]
pub struct AdminCapability {
    _private: (),
}

impl AdminCapability {
    pub(crate) fn grant(is_admin: bool) -> Option<Self> {
        is_admin.then_some(Self { _private: () })
    }
}
