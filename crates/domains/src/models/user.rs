use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Banned,
}

/// A forum member as listed in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub status: UserStatus,
    /// Post count shown next to the name; not derived from the store.
    pub posts: u32,
}

impl User {
    pub fn is_banned(&self) -> bool {
        self.status == UserStatus::Banned
    }

    /// Two-letter avatar fallback, uppercased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).flat_map(char::to_uppercase).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_handle_cyrillic() {
        let user = User {
            id: 3,
            name: "Спамер2024".into(),
            status: UserStatus::Banned,
            posts: 12,
        };
        assert_eq!(user.initials(), "СП");
        assert!(user.is_banned());
    }
}
