//! A bound negotiation session between one agent and one matcher

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::error::{GridMatchError, Result};
use crate::types::{BidUpdate, MarketBasis, PriceUpdate, SessionId};

use super::endpoints::{AgentEndpoint, MatcherEndpoint, PotentialSession};

/// A negotiation session carrying bid updates (agent to matcher) and price
/// updates (matcher to agent) under a market basis agreed once per session.
///
/// A session is single-use: connect, operate, disconnect. Once disconnected
/// it never reconnects; further updates are accepted as no-ops.
pub struct Session {
    session_id: SessionId,
    agent_id: String,
    matcher_id: String,
    cluster_id: String,
    agent: Arc<dyn AgentEndpoint>,
    matcher: Arc<dyn MatcherEndpoint>,
    potential: Arc<dyn PotentialSession>,
    market_basis: OnceLock<MarketBasis>,
    connected: AtomicBool,
    // Serializes update_price, update_bid and disconnect against each other.
    // Per session, never shared: unrelated sessions must not contend.
    traffic: Mutex<()>,
}

impl Session {
    /// Create a session for an already-matched agent/matcher pair.
    ///
    /// The agent, matcher and cluster identifiers are captured here as a
    /// snapshot; later changes to the matcher's status are not reflected.
    pub fn new(
        agent: Arc<dyn AgentEndpoint>,
        matcher: Arc<dyn MatcherEndpoint>,
        potential: Arc<dyn PotentialSession>,
    ) -> Self {
        let agent_id = agent.agent_id().to_string();
        let matcher_id = matcher.agent_id().to_string();
        let cluster_id = matcher.status().cluster_id;

        Self {
            session_id: SessionId::generate(),
            agent_id,
            matcher_id,
            cluster_id,
            agent,
            matcher,
            potential,
            market_basis: OnceLock::new(),
            connected: AtomicBool::new(false),
            traffic: Mutex::new(()),
        }
    }

    /// Get agent ID
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Get matcher ID
    pub fn matcher_id(&self) -> &str {
        &self.matcher_id
    }

    /// Get cluster ID, as captured at construction
    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    /// Get session ID
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Get the bound market basis, or `None` if the matcher has not
    /// supplied one yet
    pub fn market_basis(&self) -> Option<&MarketBasis> {
        self.market_basis.get()
    }

    /// Whether traffic currently flows over this session
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Bind the market basis for this session. May succeed at most once;
    /// rebinding is a contract violation by the matcher and leaves the
    /// existing binding untouched.
    pub fn set_market_basis(&self, basis: MarketBasis) -> Result<()> {
        self.market_basis.set(basis).map_err(|_| {
            GridMatchError::InvalidState(
                "received a new market basis for the session; the market basis cannot be changed"
                    .to_string(),
            )
        })
    }

    /// Allow traffic over this session. Requires a bound market basis.
    /// Invoked exactly once by the orchestrator during the handshake.
    pub(crate) fn mark_connected(&self) -> Result<()> {
        if self.market_basis.get().is_none() {
            return Err(GridMatchError::InvalidState(format!(
                "no market basis has been set by the matcher [{}]",
                self.matcher_id
            )));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Deliver a price update to the agent side. Dropped silently when the
    /// session is not connected. Failures inside the agent's handler
    /// propagate to the caller unmodified.
    pub fn update_price(&self, update: PriceUpdate) -> Result<()> {
        let _guard = self.traffic.lock();
        if self.connected.load(Ordering::SeqCst) {
            self.agent.handle_price_update(update)
        } else {
            tracing::debug!(
                "Dropping price update while not connected on session with agent [{}]",
                self.agent_id
            );
            Ok(())
        }
    }

    /// Deliver a bid update to the matcher side, passing this session as
    /// correlation context. Same gating and propagation as `update_price`.
    pub fn update_bid(&self, update: BidUpdate) -> Result<()> {
        let _guard = self.traffic.lock();
        if self.connected.load(Ordering::SeqCst) {
            self.matcher.handle_bid_update(self, update)
        } else {
            tracing::debug!(
                "Dropping bid update while not connected from agent [{}]",
                self.agent_id
            );
            Ok(())
        }
    }

    /// Tear the session down: stop traffic, then notify the agent, the
    /// matcher and the potential-session handle, in that order.
    ///
    /// A failing notification aborts the remainder of the fan-out and
    /// propagates; callers needing the full fan-out must re-invoke. There is
    /// no re-entrancy guard: a second call re-runs the fan-out.
    pub fn disconnect(&self) -> Result<()> {
        let _guard = self.traffic.lock();
        self.connected.store(false, Ordering::SeqCst);
        self.agent.matcher_endpoint_disconnected(self)?;
        self.matcher.agent_endpoint_disconnected(self)?;
        self.potential.disconnected()?;
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &self.session_id)
            .field("agent_id", &self.agent_id)
            .field("matcher_id", &self.matcher_id)
            .field("cluster_id", &self.cluster_id)
            .field("connected", &self.is_connected())
            .finish()
    }
}
