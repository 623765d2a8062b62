//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod gateway;

pub use auth::{CredentialStorage, TokenProvider};
pub use gateway::ApiGateway;
