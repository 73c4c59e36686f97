//! Capability interfaces for session collaborators
//!
//! The session makes direct synchronous calls through these traits. Keeping
//! them narrow means an asynchronous transport could be substituted behind
//! them without changing the session's own contract.

use crate::error::Result;
use crate::types::{BidUpdate, MatcherStatus, PriceUpdate};

use super::session::Session;

/// Agent side of a session: a single demand/supply unit that submits bids
/// and receives prices
pub trait AgentEndpoint: Send + Sync {
    /// Identifier of this agent
    fn agent_id(&self) -> &str;

    /// Deliver a price update published by the matcher
    fn handle_price_update(&self, update: PriceUpdate) -> Result<()>;

    /// The matcher side of the given session has gone away
    fn matcher_endpoint_disconnected(&self, session: &Session) -> Result<()>;
}

/// Matcher side of a session: aggregates bids from its agents and publishes
/// a price. Matchers are agents themselves, hence `agent_id`.
pub trait MatcherEndpoint: Send + Sync {
    /// Identifier of this matcher
    fn agent_id(&self) -> &str;

    /// Current status of this matcher
    fn status(&self) -> MatcherStatus;

    /// Deliver a bid update, with the originating session as correlation
    /// context
    fn handle_bid_update(&self, session: &Session, update: BidUpdate) -> Result<()>;

    /// The agent side of the given session has gone away
    fn agent_endpoint_disconnected(&self, session: &Session) -> Result<()>;
}

/// Handle to the potential-session booking that preceded a full session
pub trait PotentialSession: Send + Sync {
    /// The session built from this potential session has been torn down;
    /// release any transitional state held for it
    fn disconnected(&self) -> Result<()>;
}
