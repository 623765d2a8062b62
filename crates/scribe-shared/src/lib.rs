//! # Scribe Shared
//!
//! Wire shapes exchanged with the backend - request payloads and the
//! error body format. Kept apart from the domain layer so the HTTP
//! boundary is the only place that knows about them.

pub mod dto;
pub mod response;

pub use response::ErrorBody;
