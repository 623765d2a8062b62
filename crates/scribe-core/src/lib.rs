//! # Scribe Core
//!
//! The domain layer of the Scribe client.
//! This crate contains the session and post-collection logic with zero
//! infrastructure dependencies; network and persistence live behind ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{ApiError, StorageError};
