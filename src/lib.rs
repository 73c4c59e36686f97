//! gridmatch — negotiation sessions for distributed energy-trading
//! coordination
//!
//! A session is the bound, stateful channel between two market-protocol
//! participants: a demand/supply agent and a matcher that aggregates agents.
//! It carries bid updates (agent to matcher) and price updates (matcher to
//! agent) under a market basis agreed once per session, and tears itself
//! down cooperatively across both endpoints and the potential-session handle
//! that preceded it.
//!
//! Bid aggregation, price computation, transport and discovery live in the
//! collaborators behind the [`session::endpoints`] traits, not here.

pub mod error;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{GridMatchError, Result};
pub use session::{AgentEndpoint, MatcherEndpoint, PotentialSession, Session, SessionManager};
pub use types::{BidUpdate, MarketBasis, MatcherStatus, PriceUpdate, SessionId};
