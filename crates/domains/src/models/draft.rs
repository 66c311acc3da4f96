use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::models::Section;

/// Form buffer behind the "create post" dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub section: Section,
}

/// A single field edit coming from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Content(String),
    Section(Section),
}

impl PostDraft {
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Title(title) => self.title = title,
            DraftField::Content(content) => self.content = content,
            DraftField::Section(section) => self.section = section,
        }
    }

    /// Whether the publish button is enabled.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Checks the draft and hands back the only value post creation accepts.
    pub fn validate(&self) -> Result<ValidDraft, DomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        Ok(ValidDraft {
            title: title.to_string(),
            content: content.to_string(),
            section: self.section,
        })
    }
}

/// A draft whose title and content are known to be non-blank (trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    title: String,
    content: String,
    section: Section,
}

impl ValidDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn into_parts(self) -> (String, String, Section) {
        (self.title, self.content, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.into(),
            content: content.into(),
            section: Section::Rules,
        }
    }

    #[test]
    fn default_draft_targets_news() {
        let d = PostDraft::default();
        assert_eq!(d.section, Section::News);
        assert!(!d.is_submittable());
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        assert!(matches!(
            draft("   ", "body").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            draft("title", "\n\t ").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(!draft(" ", " ").is_submittable());
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let valid = draft("  Patch notes ", " Fixed bugs\n").validate().unwrap();
        assert_eq!(valid.title(), "Patch notes");
        assert_eq!(valid.content(), "Fixed bugs");
        assert_eq!(valid.section(), Section::Rules);
    }

    #[test]
    fn apply_merges_one_field() {
        let mut d = draft("a", "b");
        d.apply(DraftField::Section(Section::Support));
        d.apply(DraftField::Title("new".into()));
        assert_eq!(d.title, "new");
        assert_eq!(d.content, "b");
        assert_eq!(d.section, Section::Support);
    }
}
