//! Read-only snapshot types handed to the status view.
//!
//! Everything here is an owned copy. Nothing in a [`KitchenStatus`] points back
//! into shelf storage.

use crate::model::{OrderId, ShelfKind, Temperature};
use serde::Serialize;

/// Copy of one held order at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatus {
    pub id: OrderId,
    pub name: String,
    pub temperature: Temperature,
    pub shelf_life: u32,
    pub decay_rate: f64,
    pub arrived_at_ms: u64,
    pub age: f64,
    pub decay_modifier: f64,
    pub value: f64,
}

/// Contents of one shelf, ordered oldest arrival first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelfStatus {
    pub kind: ShelfKind,
    pub capacity: usize,
    pub decay_modifier: f64,
    pub orders: Vec<OrderStatus>,
}

/// Per-shelf order counts for lightweight display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShelfCounts {
    pub hot: usize,
    pub cold: usize,
    pub frozen: usize,
    pub overflow: usize,
}

impl ShelfCounts {
    pub fn total(&self) -> usize {
        self.hot + self.cold + self.frozen + self.overflow
    }
}

/// Running totals since the simulation started.
///
/// Every order that was received is, at any observable point, either still held
/// on a shelf, delivered, or wasted. Rejected arrivals are counted in both
/// `rejected` and `wasted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KitchenStats {
    pub received: u64,
    pub delivered: u64,
    pub wasted: u64,
    pub rejected: u64,
    pub relocated: u64,
    pub reclaimed: u64,
}

/// Full kitchen snapshot: every shelf plus running totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KitchenStatus {
    pub shelves: Vec<ShelfStatus>,
    pub stats: KitchenStats,
}

impl KitchenStatus {
    pub fn shelf(&self, kind: ShelfKind) -> Option<&ShelfStatus> {
        self.shelves.iter().find(|s| s.kind == kind)
    }

    pub fn counts(&self) -> ShelfCounts {
        let mut counts = ShelfCounts::default();
        for shelf in &self.shelves {
            let n = shelf.orders.len();
            match shelf.kind {
                ShelfKind::Home(Temperature::Hot) => counts.hot = n,
                ShelfKind::Home(Temperature::Cold) => counts.cold = n,
                ShelfKind::Home(Temperature::Frozen) => counts.frozen = n,
                ShelfKind::Overflow => counts.overflow = n,
            }
        }
        counts
    }
}
