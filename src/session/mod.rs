//! Negotiation sessions between agent and matcher endpoints

pub mod endpoints;
pub mod manager;
pub mod session;

pub use endpoints::{AgentEndpoint, MatcherEndpoint, PotentialSession};
pub use manager::SessionManager;
pub use session::Session;
