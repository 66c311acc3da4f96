//! Shared helpers for the integration test targets.

use domains::{Post, PostDraft, PostStatus, Section, ValidDraft};
use notify_adapters::ToastLog;
use services::{AdminCapability, ForumPage, PageOptions};
use storage_adapters::Seed;

/// Page mounted on the bundled seed with a toast log as sink.
pub fn seeded_page(options: PageOptions) -> (ForumPage<ToastLog>, Option<AdminCapability>) {
    let seed = Seed::load_default().expect("bundled seed parses");
    ForumPage::start(seed.posts, seed.users, ToastLog::new(), options)
}

/// Admin page mounted on the bundled seed.
pub fn admin_page() -> (ForumPage<ToastLog>, AdminCapability) {
    let (page, admin) = seeded_page(PageOptions::default());
    (page, admin.expect("default options grant admin"))
}

pub fn draft(title: &str, content: &str, section: Section) -> ValidDraft {
    PostDraft {
        title: title.into(),
        content: content.into(),
        section,
    }
    .validate()
    .expect("test drafts are valid")
}

pub fn post(id: u64, section: Section) -> Post {
    Post {
        id,
        title: format!("post {id}"),
        content: format!("content of {id}"),
        author: "fixture".into(),
        section,
        timestamp: "today".into(),
        likes: 1,
        comments: 0,
        is_pinned: false,
        status: PostStatus::Active,
    }
}

pub fn ids<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<u64> {
    posts.map(|p| p.id).collect()
}
