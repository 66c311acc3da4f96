//! # services
//!
//! State and transitions of the forum page. One owned [`ForumPage`] per
//! page session; every operation runs to completion synchronously.

pub mod capability;
pub mod copy;
pub mod events;
pub mod page;
pub mod post_store;
pub mod user_directory;
pub mod view_state;

pub use capability::AdminCapability;
pub use copy::PageCopy;
pub use events::{EventOutcome, PageEvent};
pub use page::{AdminRequest, ForumPage, PageOptions, PageStats};
pub use post_store::PostStore;
pub use user_directory::UserDirectory;
pub use view_state::ViewState;
