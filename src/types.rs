//! Core types used throughout gridmatch

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a negotiation session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new random session ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The shared price domain both sides of a session must use to interpret
/// bids and prices. Fixed once per session by the matcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketBasis {
    pub commodity: String,
    pub currency: String,
    /// Number of discrete price steps between the minimum and maximum price
    pub price_steps: u32,
    pub minimum_price: f64,
    pub maximum_price: f64,
}

impl MarketBasis {
    /// Price difference between two adjacent price steps
    pub fn price_increment(&self) -> f64 {
        (self.maximum_price - self.minimum_price) / (self.price_steps - 1) as f64
    }
}

/// Price published by a matcher in response to a numbered bid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub bid_number: u64,
    pub price: f64,
}

/// An agent's demand curve, one demand value per price step of the
/// session's market basis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidUpdate {
    pub bid_number: u64,
    pub demand: Vec<f64>,
}

/// Snapshot of a matcher endpoint's status
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherStatus {
    /// Identifier of the cluster this matcher coordinates
    pub cluster_id: String,
}
