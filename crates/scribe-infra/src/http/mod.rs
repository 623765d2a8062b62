//! HTTP gateway - the one place that speaks to the backend.

mod gateway;

pub use gateway::HttpApiGateway;
