//! Domain entities - the objects the client manages.

mod credential;
mod post;
mod user;

pub use credential::Credential;
pub use post::{Post, PostAuthor, PostDraft};
pub use user::User;
