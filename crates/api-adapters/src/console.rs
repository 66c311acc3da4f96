//! Runs parsed commands against a page session.

use domains::{AdminActionKind, DomainError, NotificationSink};
use services::{AdminCapability, EventOutcome, ForumPage, PageEvent};
use thiserror::Error;
use tracing::debug;

use crate::command::{Command, HELP};
use crate::render::{render_page, RenderError};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Page(String),
    Outcome(EventOutcome),
    Help(&'static str),
    Quit,
}

pub fn execute<N: NotificationSink>(
    page: &mut ForumPage<N>,
    admin: Option<&AdminCapability>,
    command: Command,
) -> Result<Reply, ConsoleError> {
    let event = match command {
        Command::Show => return Ok(Reply::Page(render_page(page)?)),
        Command::Help => return Ok(Reply::Help(HELP)),
        Command::Quit => return Ok(Reply::Quit),
        Command::Event(event) => event,
        Command::Confirm => match page.view().admin_action().kind() {
            AdminActionKind::Delete => PageEvent::ConfirmDelete,
            AdminActionKind::Ban => PageEvent::ConfirmBan,
            AdminActionKind::Filter => PageEvent::SaveFilterSettings,
            AdminActionKind::None => {
                debug!("confirm with no open dialog");
                return Ok(Reply::Outcome(EventOutcome::Unavailable));
            }
        },
    };
    Ok(Reply::Outcome(page.update(admin, event)?))
}
