//! Transient UI state of the page: tab, dialogs, draft and pending admin action.

use domains::{AdminAction, DomainError, DraftField, PostDraft, Section, Tab};
use tracing::{debug, warn};

use crate::capability::AdminCapability;

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_tab: Tab,
    create_post_open: bool,
    admin_action: AdminAction,
    draft: PostDraft,
    is_admin: bool,
}

impl ViewState {
    pub fn new(is_admin: bool) -> Self {
        Self {
            is_admin,
            ..Self::default()
        }
    }

    // ==================== Accessors ====================

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_create_post_open(&self) -> bool {
        self.create_post_open
    }

    pub fn admin_action(&self) -> &AdminAction {
        &self.admin_action
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    // ==================== Tabs ====================

    pub fn select_section(&mut self, section: Section) {
        debug!(from = %self.active_tab, to = %section, "select section");
        self.active_tab = Tab::from(section);
    }

    pub fn open_admin_panel(&mut self, _admin: &AdminCapability) {
        debug!(from = %self.active_tab, "open admin panel");
        self.active_tab = Tab::Admin;
    }

    // ==================== Create Dialog ====================

    pub fn open_create_dialog(&mut self) {
        self.create_post_open = true;
    }

    /// Closes the dialog and throws the draft away.
    pub fn close_create_dialog(&mut self) {
        self.create_post_open = false;
        self.draft = PostDraft::default();
    }

    /// Merges one field into the draft. No validation here.
    pub fn update_draft(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    // ==================== Admin Actions ====================

    /// Opens an admin dialog. Only legal from `AdminAction::None`.
    ///
    /// Requesting `AdminAction::None` behaves like [`Self::cancel_admin_action`].
    pub fn request_admin_action(
        &mut self,
        _admin: &AdminCapability,
        action: AdminAction,
    ) -> Result<(), DomainError> {
        if action.is_none() {
            self.cancel_admin_action();
            return Ok(());
        }
        if !self.admin_action.is_none() {
            let err = DomainError::AdminActionPending {
                pending: self.admin_action.kind(),
                requested: action.kind(),
            };
            warn!(%err, "admin action refused");
            return Err(err);
        }
        debug!(action = %action.kind(), "admin action requested");
        self.admin_action = action;
        Ok(())
    }

    /// Returns to `AdminAction::None`, dropping any selected post.
    pub fn cancel_admin_action(&mut self) {
        if !self.admin_action.is_none() {
            debug!(action = %self.admin_action.kind(), "admin action cleared");
        }
        self.admin_action = AdminAction::None;
    }
}
