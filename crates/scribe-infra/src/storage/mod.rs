//! Credential storage backends - file-based and in-memory fallback.

mod file;
mod memory;

pub use file::FileCredentialStorage;
pub use memory::InMemoryCredentialStorage;
