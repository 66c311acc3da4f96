//! Plain-text rendering of the page through askama.

use askama::Template;
use domains::{AdminAction, NotificationSink, Section, Tab, UserStatus};
use services::ForumPage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to render page: {0}")]
    Template(#[from] askama::Error),
}

struct TabCell {
    name: &'static str,
    active: bool,
}

struct SectionCount {
    name: &'static str,
    posts: usize,
}

struct PostRow<'a> {
    id: u64,
    pinned: bool,
    title: &'a str,
    author: &'a str,
    timestamp: &'a str,
    likes: u32,
    comments: u32,
    content: &'a str,
}

struct UserRow<'a> {
    initials: String,
    name: &'a str,
    posts: u32,
    status: &'static str,
}

#[derive(Template)]
#[template(path = "page.txt")]
struct PageTemplate<'a> {
    is_admin: bool,
    tabs: Vec<TabCell>,
    admin_tab: bool,
    posts: Vec<PostRow<'a>>,
    total_posts: usize,
    pinned_posts: usize,
    section_counts: Vec<SectionCount>,
    user_count: usize,
    banned_users: usize,
    users: Vec<UserRow<'a>>,
    dialog: Vec<String>,
}

/// Renders the active tab plus whichever dialog is open.
pub fn render_page<N: NotificationSink>(page: &ForumPage<N>) -> Result<String, RenderError> {
    let view = page.view();
    let active = view.active_tab();

    let mut tabs: Vec<TabCell> = Section::ALL
        .iter()
        .map(|&s| TabCell {
            name: s.as_str(),
            active: active == Tab::from(s),
        })
        .collect();
    // The admin tab trigger only exists for admins.
    if view.is_admin() {
        tabs.push(TabCell {
            name: Tab::Admin.as_str(),
            active: active == Tab::Admin,
        });
    }

    let stats = page.stats();
    let template = PageTemplate {
        is_admin: view.is_admin(),
        tabs,
        admin_tab: active == Tab::Admin,
        posts: page
            .visible_posts()
            .map(|p| PostRow {
                id: p.id,
                pinned: p.is_pinned,
                title: &p.title,
                author: &p.author,
                timestamp: &p.timestamp,
                likes: p.likes,
                comments: p.comments,
                content: &p.content,
            })
            .collect(),
        total_posts: stats.total_posts,
        pinned_posts: stats.pinned_posts,
        section_counts: stats
            .per_section
            .iter()
            .map(|&(s, posts)| SectionCount {
                name: s.as_str(),
                posts,
            })
            .collect(),
        user_count: stats.users,
        banned_users: stats.banned_users,
        users: page
            .users()
            .iter()
            .map(|u| UserRow {
                initials: u.initials(),
                name: &u.name,
                posts: u.posts,
                status: match u.status {
                    UserStatus::Active => "active",
                    UserStatus::Banned => "banned",
                },
            })
            .collect(),
        dialog: dialog_lines(page),
    };
    Ok(template.render()?)
}

fn dialog_lines<N: NotificationSink>(page: &ForumPage<N>) -> Vec<String> {
    let view = page.view();
    let mut lines = Vec::new();

    if view.is_create_post_open() {
        let draft = view.draft();
        let submit = if draft.is_submittable() {
            "[submit]"
        } else {
            "[submit: disabled]"
        };
        lines.push("── new post ──".to_string());
        lines.push(format!("section: {}", draft.section));
        lines.push(format!("title:   {}", draft.title));
        lines.push(format!("content: {}", draft.content));
        lines.push(format!("{submit} [cancel]"));
    }

    match view.admin_action() {
        AdminAction::None => {}
        AdminAction::Delete { post } => {
            lines.push("── delete post? ──".to_string());
            lines.push(format!(
                "Delete \"{}\"? This cannot be undone. [confirm] [close]",
                post.title
            ));
        }
        AdminAction::Ban => {
            lines.push("── ban user ──".to_string());
            lines.push("reason: …  duration: permanent  [confirm] [close]".to_string());
        }
        AdminAction::Filter => {
            lines.push("── content filters ──".to_string());
            lines.push("banned words: …  auto-delete: off  warnings: off".to_string());
            lines.push("[confirm] [close]".to_string());
        }
    }
    lines
}
