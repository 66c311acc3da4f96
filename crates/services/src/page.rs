//! # ForumPage
//!
//! One page session: owns the view state, the post store and the user
//! directory, and reports every confirmed mutation to a [`NotificationSink`].

use domains::{
    AdminAction, DomainError, DraftField, IdStrategy, Locale, NotificationSink, Post, PostId,
    Section, User, ValidDraft,
};
use tracing::{debug, info};

use crate::capability::AdminCapability;
use crate::copy::PageCopy;
use crate::post_store::PostStore;
use crate::user_directory::UserDirectory;
use crate::view_state::ViewState;

/// Session-wide switches fixed at page mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub is_admin: bool,
    pub id_strategy: IdStrategy,
    pub locale: Locale,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            is_admin: true,
            id_strategy: IdStrategy::default(),
            locale: Locale::default(),
        }
    }
}

/// Admin dialog a caller can ask for. Delete targets a post by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRequest {
    Delete(PostId),
    Ban,
    Filter,
}

/// Counters shown on the admin tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStats {
    pub total_posts: usize,
    pub pinned_posts: usize,
    pub per_section: Vec<(Section, usize)>,
    pub users: usize,
    pub active_users: usize,
    pub banned_users: usize,
}

pub struct ForumPage<N> {
    view: ViewState,
    posts: PostStore,
    users: UserDirectory,
    sink: N,
    copy: PageCopy,
}

impl<N: NotificationSink> ForumPage<N> {
    /// Mounts the page. The admin capability is decided here, once, and
    /// handed back only when `options.is_admin` is set.
    pub fn start(
        posts: Vec<Post>,
        users: Vec<User>,
        sink: N,
        options: PageOptions,
    ) -> (Self, Option<AdminCapability>) {
        info!(
            posts = posts.len(),
            users = users.len(),
            is_admin = options.is_admin,
            id_strategy = ?options.id_strategy,
            locale = %options.locale,
            "forum page mounted"
        );
        let page = Self {
            view: ViewState::new(options.is_admin),
            posts: PostStore::new(posts, options.id_strategy),
            users: UserDirectory::new(users),
            sink,
            copy: PageCopy::for_locale(options.locale),
        };
        (page, AdminCapability::grant(options.is_admin))
    }

    // ==================== Accessors ====================

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn copy(&self) -> &PageCopy {
        &self.copy
    }

    /// Posts of the active tab, in store order. Empty on the admin tab.
    pub fn visible_posts(&self) -> impl Iterator<Item = &Post> + '_ {
        self.view
            .active_tab()
            .section()
            .into_iter()
            .flat_map(move |section| self.posts.filter_by_section(section))
    }

    pub fn stats(&self) -> PageStats {
        PageStats {
            total_posts: self.posts.len(),
            pinned_posts: self.posts.pinned_count(),
            per_section: Section::ALL
                .iter()
                .map(|&s| (s, self.posts.count_in(s)))
                .collect(),
            users: self.users.len(),
            active_users: self.users.active_count(),
            banned_users: self.users.banned_count(),
        }
    }

    // ==================== View Transitions ====================

    pub fn select_section(&mut self, section: Section) {
        self.view.select_section(section);
    }

    pub fn open_admin_panel(&mut self, admin: &AdminCapability) {
        self.view.open_admin_panel(admin);
    }

    pub fn open_create_dialog(&mut self) {
        self.view.open_create_dialog();
    }

    pub fn close_create_dialog(&mut self) {
        self.view.close_create_dialog();
    }

    pub fn update_draft(&mut self, field: DraftField) {
        self.view.update_draft(field);
    }

    /// Opens an admin dialog. A delete request must name a stored post.
    pub fn request_admin_action(
        &mut self,
        admin: &AdminCapability,
        request: AdminRequest,
    ) -> Result<(), DomainError> {
        let action = match request {
            AdminRequest::Delete(id) => {
                let post = self.posts.get(id).ok_or(DomainError::UnknownPost(id))?;
                AdminAction::Delete { post: post.clone() }
            }
            AdminRequest::Ban => AdminAction::Ban,
            AdminRequest::Filter => AdminAction::Filter,
        };
        self.view.request_admin_action(admin, action)
    }

    pub fn cancel_admin_action(&mut self) {
        self.view.cancel_admin_action();
    }

    // ==================== Mutations ====================

    /// Publishes the dialog's draft. A blank title or content leaves
    /// everything as it was and reports `DomainError::Validation`.
    pub fn submit_draft(&mut self, admin: &AdminCapability) -> Result<PostId, DomainError> {
        let draft = self.view.draft().validate()?;
        Ok(self.create_post(admin, draft))
    }

    /// Stores a new post at the front, closes the dialog and resets the draft.
    pub fn create_post(&mut self, _admin: &AdminCapability, draft: ValidDraft) -> PostId {
        let post = self
            .posts
            .create(draft, &self.copy.admin_author, &self.copy.just_now);
        let id = post.id;
        info!(id, section = %post.section, title = %post.title, "post created");

        self.view.close_create_dialog();
        self.sink.notify(self.copy.published_toast());
        id
    }

    /// Removes every post with `id` and closes any admin dialog. Unknown
    /// ids change nothing in the store and produce no toast.
    pub fn delete_post(&mut self, _admin: &AdminCapability, id: PostId) -> Vec<Post> {
        let removed = self.posts.delete(id);
        self.view.cancel_admin_action();
        match removed.first() {
            Some(post) => {
                info!(id, title = %post.title, count = removed.len(), "post deleted");
                self.sink.notify(self.copy.deleted_toast());
            }
            None => debug!(id, "delete ignored: no such post"),
        }
        removed
    }

    /// Deletes the post selected by a pending delete action.
    pub fn confirm_delete(&mut self, admin: &AdminCapability) -> Vec<Post> {
        match self.view.admin_action().selected_post() {
            Some(post) => {
                let id = post.id;
                self.delete_post(admin, id)
            }
            None => Vec::new(),
        }
    }

    /// Reports a ban and closes the dialog when a ban is pending. The user
    /// directory is not touched: banning is simulated on this page.
    pub fn confirm_ban(&mut self, _admin: &AdminCapability) -> bool {
        if !matches!(self.view.admin_action(), AdminAction::Ban) {
            debug!(pending = %self.view.admin_action().kind(), "ban confirm ignored");
            return false;
        }
        info!("ban confirmed (simulated)");
        self.sink.notify(self.copy.banned_toast());
        self.view.cancel_admin_action();
        true
    }

    /// Reports saved filter settings and closes the dialog when the filter
    /// dialog is open. Its controls carry no state, so nothing else changes.
    pub fn save_filter_settings(&mut self, _admin: &AdminCapability) -> bool {
        if !matches!(self.view.admin_action(), AdminAction::Filter) {
            debug!(pending = %self.view.admin_action().kind(), "filter save ignored");
            return false;
        }
        info!("filter settings saved (simulated)");
        self.sink.notify(self.copy.filters_saved_toast());
        self.view.cancel_admin_action();
        true
    }
}
