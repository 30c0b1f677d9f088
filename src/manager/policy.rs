//! Tie-break policies for the shelf manager.
//!
//! The defaults give first-in-first-out behaviour everywhere: couriers take the
//! longest-waiting order, spillover moves the longest-waiting order, and
//! reclamation gives home slots back to the longest-waiting overflow orders.

use crate::shelf::RemovalPolicy;
use serde::{Deserialize, Serialize};

/// Order in which overflow orders are offered a free home slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReclaimOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// What may be discarded to make room when both the home shelf and overflow are full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Only an already-expired order may be evicted; otherwise the arrival is rejected.
    #[default]
    ExpiredOnly,
    /// The lowest-value candidate is always evicted.
    MostDecayed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfPolicy {
    /// Which order a courier takes.
    pub pickup: RemovalPolicy,
    /// Which home order is pushed to overflow when the home shelf is full.
    pub displace: RemovalPolicy,
    pub reclaim: ReclaimOrder,
    pub eviction: EvictionPolicy,
}
