//! # api-adapters
//!
//! Console boundary of the forum page: text commands in, rendered page out.

pub mod command;
pub mod console;
pub mod render;

pub use command::{parse, Command, CommandError};
pub use console::{execute, ConsoleError, Reply};
pub use render::{render_page, RenderError};
