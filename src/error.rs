//! Error types for gridmatch

use thiserror::Error;

/// Main error type for gridmatch
#[derive(Error, Debug)]
pub enum GridMatchError {
    // Session lifecycle errors
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    // Delivery errors raised by endpoint handlers
    #[error("Price delivery failed: {0}")]
    PriceDelivery(String),

    #[error("Bid delivery failed: {0}")]
    BidDelivery(String),

    #[error("Disconnect notification failed: {0}")]
    DisconnectNotification(String),
}

/// Result type alias for gridmatch operations
pub type Result<T> = std::result::Result<T, GridMatchError>;
