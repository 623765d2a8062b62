//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! the HTTP gateway that talks to the backend and the credential
//! storage backends.

pub mod http;
pub mod storage;

pub use http::HttpApiGateway;
pub use storage::{FileCredentialStorage, InMemoryCredentialStorage};
