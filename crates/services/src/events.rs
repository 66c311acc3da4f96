//! Single entry point for the presentation layer.
//!
//! Every control on the page maps to one [`PageEvent`]. Admin-only events
//! reaching a session without the capability are reported as
//! [`EventOutcome::Unavailable`]: the control does not exist for that user.

use domains::{DomainError, DraftField, NotificationSink, PostId, Tab};
use tracing::debug;

use crate::capability::AdminCapability;
use crate::page::{AdminRequest, ForumPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    SelectTab(Tab),
    OpenCreateDialog,
    CloseCreateDialog,
    UpdateDraft(DraftField),
    SubmitDraft,
    RequestAdminAction(AdminRequest),
    CancelAdminAction,
    ConfirmDelete,
    ConfirmBan,
    SaveFilterSettings,
}

impl PageEvent {
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            PageEvent::SelectTab(Tab::Admin)
                | PageEvent::OpenCreateDialog
                | PageEvent::SubmitDraft
                | PageEvent::RequestAdminAction(_)
                | PageEvent::ConfirmDelete
                | PageEvent::ConfirmBan
                | PageEvent::SaveFilterSettings
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Created(PostId),
    /// `None` when the pending delete had nothing to remove.
    Deleted(Option<PostId>),
    /// The control behind this event is not shown to the current session.
    Unavailable,
}

impl<N: NotificationSink> ForumPage<N> {
    pub fn update(
        &mut self,
        admin: Option<&AdminCapability>,
        event: PageEvent,
    ) -> Result<EventOutcome, DomainError> {
        debug!(?event, "page event");
        let admin = match (admin, event.requires_admin()) {
            (None, true) => return Ok(EventOutcome::Unavailable),
            (admin, _) => admin,
        };

        match event {
            PageEvent::SelectTab(tab) => match (tab.section(), admin) {
                (Some(section), _) => self.select_section(section),
                (None, Some(admin)) => self.open_admin_panel(admin),
                (None, None) => return Ok(EventOutcome::Unavailable),
            },
            PageEvent::OpenCreateDialog => self.open_create_dialog(),
            PageEvent::CloseCreateDialog => self.close_create_dialog(),
            PageEvent::UpdateDraft(field) => self.update_draft(field),
            PageEvent::CancelAdminAction => self.cancel_admin_action(),
            admin_event => {
                let Some(admin) = admin else {
                    return Ok(EventOutcome::Unavailable);
                };
                return self.apply_admin_event(admin, admin_event);
            }
        }
        Ok(EventOutcome::Applied)
    }

    fn apply_admin_event(
        &mut self,
        admin: &AdminCapability,
        event: PageEvent,
    ) -> Result<EventOutcome, DomainError> {
        match event {
            PageEvent::SubmitDraft => self.submit_draft(admin).map(EventOutcome::Created),
            PageEvent::RequestAdminAction(request) => self
                .request_admin_action(admin, request)
                .map(|()| EventOutcome::Applied),
            PageEvent::ConfirmDelete => {
                let removed = self.confirm_delete(admin);
                Ok(EventOutcome::Deleted(removed.first().map(|p| p.id)))
            }
            PageEvent::ConfirmBan => Ok(applied_if(self.confirm_ban(admin))),
            PageEvent::SaveFilterSettings => Ok(applied_if(self.save_filter_settings(admin))),
            _ => Ok(EventOutcome::Applied),
        }
    }
}

fn applied_if(done: bool) -> EventOutcome {
    if done {
        EventOutcome::Applied
    } else {
        EventOutcome::Unavailable
    }
}
