//! Stores - the client's in-memory state, mutated only through the
//! operations defined here.

mod posts;
mod session;

pub use posts::{FetchStatus, PostStore};
pub use session::CredentialStore;
