//! # Domain Models
//!
//! Every union-typed field of the page is a closed enum here, so a post
//! can never carry a section outside `rules | support | news`.

mod draft;
mod locale;
mod notification;
mod post;
mod user;
mod view;

pub use draft::*;
pub use locale::*;
pub use notification::*;
pub use post::*;
pub use user::*;
pub use view::*;
