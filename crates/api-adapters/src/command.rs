//! Line-oriented command grammar. [`HELP`] lists every command.

use domains::{DomainError, DraftField, PostId, Section, Tab};
use services::{AdminRequest, PageEvent};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{command}`: {value:?} is not a post id")]
    BadId { command: &'static str, value: String },

    #[error(transparent)]
    Value(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(PageEvent),
    /// Confirms whichever admin dialog is open.
    Confirm,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
tab <news|rules|support|admin>   switch tab
new | cancel                     open / discard the create dialog
title <text> | body <text>       edit the draft
section <news|rules|support>     change the draft's section
submit                           publish the draft
delete <id> | ban | filter       open an admin dialog
confirm | close                  confirm / dismiss the admin dialog
show | help | quit";

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match word.to_ascii_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "show" | "ls" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "confirm" | "yes" => return Ok(Command::Confirm),
        "tab" => PageEvent::SelectTab(required("tab", rest)?.parse::<Tab>()?),
        "new" => PageEvent::OpenCreateDialog,
        "cancel" => PageEvent::CloseCreateDialog,
        "title" => PageEvent::UpdateDraft(DraftField::Title(rest.to_string())),
        "body" => PageEvent::UpdateDraft(DraftField::Content(rest.to_string())),
        "section" => PageEvent::UpdateDraft(DraftField::Section(
            required("section", rest)?.parse::<Section>()?,
        )),
        "submit" => PageEvent::SubmitDraft,
        "delete" => PageEvent::RequestAdminAction(AdminRequest::Delete(post_id("delete", rest)?)),
        "ban" => PageEvent::RequestAdminAction(AdminRequest::Ban),
        "filter" => PageEvent::RequestAdminAction(AdminRequest::Filter),
        "close" => PageEvent::CancelAdminAction,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Command::Event(event))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn post_id(command: &'static str, rest: &str) -> Result<PostId, CommandError> {
    let raw = required(command, rest)?.trim_start_matches('#');
    raw.parse().map_err(|_| CommandError::BadId {
        command,
        value: rest.to_string(),
    })
}
