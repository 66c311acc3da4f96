//! Read-only list of forum members.
//!
//! Banning from the admin panel does not write here; see
//! [`ForumPage::confirm_ban`](crate::ForumPage::confirm_ban).

use domains::User;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.iter()
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn banned_count(&self) -> usize {
        self.users.iter().filter(|u| u.is_banned()).count()
    }

    pub fn active_count(&self) -> usize {
        self.len() - self.banned_count()
    }
}
