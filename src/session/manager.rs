//! Session manager owns active sessions and runs the connect handshake

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{GridMatchError, Result};
use crate::types::{MarketBasis, SessionId};

use super::endpoints::{AgentEndpoint, MatcherEndpoint, PotentialSession};
use super::session::Session;

/// Orchestrates sessions: pairs endpoints into sessions, completes the
/// connect handshake once the matcher has supplied a market basis, and
/// deregisters sessions on close.
pub struct SessionManager {
    active_sessions: HashMap<SessionId, Arc<Session>>,
}

impl SessionManager {
    /// Create new session manager
    pub fn new() -> Self {
        Self {
            active_sessions: HashMap::new(),
        }
    }

    /// Pair an agent with a matcher, registering the resulting session.
    /// The session carries no traffic until `establish` completes.
    pub fn open_session(
        &mut self,
        agent: Arc<dyn AgentEndpoint>,
        matcher: Arc<dyn MatcherEndpoint>,
        potential: Arc<dyn PotentialSession>,
    ) -> Arc<Session> {
        let session = Arc::new(Session::new(agent, matcher, potential));
        tracing::info!(
            "Opened session {} between agent [{}] and matcher [{}]",
            session.session_id(),
            session.agent_id(),
            session.matcher_id()
        );
        self.active_sessions
            .insert(session.session_id().clone(), session.clone());
        session
    }

    /// Complete the handshake for a registered session: bind the basis the
    /// matcher supplied, then allow traffic.
    pub fn establish(&self, session_id: &SessionId, basis: MarketBasis) -> Result<()> {
        let session = self
            .active_sessions
            .get(session_id)
            .ok_or_else(|| GridMatchError::SessionNotFound(session_id.0.clone()))?;

        session.set_market_basis(basis)?;
        session.mark_connected()
    }

    /// Get a session
    pub fn session(&self, session_id: &SessionId) -> Option<&Arc<Session>> {
        self.active_sessions.get(session_id)
    }

    /// Get all active sessions
    pub fn active_sessions(&self) -> &HashMap<SessionId, Arc<Session>> {
        &self.active_sessions
    }

    /// Deregister a session and run its disconnect fan-out. The session is
    /// removed even when a notification fails; the error propagates so the
    /// caller can re-invoke `disconnect` on its own handle if needed.
    pub fn close_session(&mut self, session_id: &SessionId) -> Result<()> {
        let session = self
            .active_sessions
            .remove(session_id)
            .ok_or_else(|| GridMatchError::SessionNotFound(session_id.0.clone()))?;

        tracing::info!("Closing session {}", session.session_id());
        session.disconnect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
