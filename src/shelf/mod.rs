//! # Shelf
//!
//! A capacity-bounded container of orders tagged with a [`ShelfKind`].
//!
//! A shelf owns the [`OrderState`] of every order it holds and is the only place
//! where ages are advanced and values recomputed. Mutation requires `&mut Shelf`,
//! which in this crate is only reachable through
//! [`ShelfManager`](crate::manager::ShelfManager), so single-writer discipline is
//! enforced by ownership rather than by a per-shelf lock.
//!
//! ## Ordering
//!
//! Storage is a `HashMap` keyed by [`OrderId`]. Every "oldest"/"newest" question
//! is answered on demand from `(arrived_at_ms, id)`, so ties on arrival time
//! break on the smaller id.

pub mod error;
pub mod order_state;

pub use error::*;
pub use order_state::*;

use crate::model::{Order, OrderId, ShelfKind, ShelfStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which order [`Shelf::remove_one`] hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Earliest arrival first (FIFO).
    #[default]
    Oldest,
    /// Latest arrival first.
    Newest,
}

#[derive(Debug, Clone)]
pub struct Shelf {
    kind: ShelfKind,
    capacity: usize,
    decay_modifier: f64,
    orders: HashMap<OrderId, OrderState>,
}

impl Shelf {
    /// Creates an empty shelf.
    ///
    /// Capacity and modifier are validated by [`KitchenConfig`](crate::config::KitchenConfig)
    /// before any shelf is built.
    pub fn new(kind: ShelfKind, capacity: usize, decay_modifier: f64) -> Self {
        Self {
            kind,
            capacity,
            decay_modifier,
            orders: HashMap::with_capacity(capacity),
        }
    }

    pub fn kind(&self) -> ShelfKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn decay_modifier(&self) -> f64 {
        self.decay_modifier
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.orders.len() >= self.capacity
    }

    pub fn has_room(&self) -> bool {
        !self.is_full()
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    pub fn get(&self, id: OrderId) -> Option<&OrderState> {
        self.orders.get(&id)
    }

    /// Inserts a new order at age 0 with this shelf's decay modifier.
    ///
    /// # Errors
    /// `CapacityExceeded` if the shelf is full. The caller is responsible for
    /// making room first.
    pub fn add(&mut self, order: Order) -> Result<(), ShelfError> {
        let state = OrderState::new(order, self.decay_modifier);
        self.insert(state)
    }

    /// Moves an existing order onto this shelf, keeping its age.
    ///
    /// The order's decay modifier is switched to this shelf's modifier before it
    /// is stored.
    pub fn insert(&mut self, mut state: OrderState) -> Result<(), ShelfError> {
        let id = state.order().id;
        if let ShelfKind::Home(temperature) = self.kind {
            if state.order().temperature != temperature {
                return Err(ShelfError::WrongShelf {
                    order: id,
                    shelf: self.kind,
                });
            }
        }
        if self.orders.contains_key(&id) {
            return Err(ShelfError::DuplicateOrder(id));
        }
        if self.is_full() {
            return Err(ShelfError::CapacityExceeded {
                shelf: self.kind,
                capacity: self.capacity,
            });
        }
        state.set_decay_modifier(self.decay_modifier);
        self.orders.insert(id, state);
        Ok(())
    }

    /// Ages every held order by `delta` seconds. Does not evict.
    pub fn age_all(&mut self, delta: f64) {
        for state in self.orders.values_mut() {
            state.age_by(delta);
        }
    }

    /// Removes and returns every expired order, oldest arrival first.
    pub fn extract_expired(&mut self) -> Vec<OrderState> {
        let expired: Vec<OrderId> = self
            .orders
            .values()
            .filter(|s| s.is_expired())
            .map(|s| s.order().id)
            .collect();
        let mut removed: Vec<OrderState> = expired
            .into_iter()
            .filter_map(|id| self.orders.remove(&id))
            .collect();
        removed.sort_by_key(|s| s.order().arrival_key());
        removed
    }

    pub fn remove_by_id(&mut self, id: OrderId) -> Result<OrderState, ShelfError> {
        self.orders.remove(&id).ok_or(ShelfError::NotFound(id))
    }

    /// Removes exactly one order chosen by `policy`.
    pub fn remove_one(&mut self, policy: RemovalPolicy) -> Result<OrderState, ShelfError> {
        let id = match policy {
            RemovalPolicy::Oldest => self.oldest(),
            RemovalPolicy::Newest => self.newest(),
        }
        .map(|s| s.order().id)
        .ok_or(ShelfError::Empty(self.kind))?;
        self.remove_by_id(id)
    }

    pub fn oldest(&self) -> Option<&OrderState> {
        self.orders.values().min_by_key(|s| s.order().arrival_key())
    }

    pub fn newest(&self) -> Option<&OrderState> {
        self.orders.values().max_by_key(|s| s.order().arrival_key())
    }

    /// The lowest-value order; ties go to the oldest.
    pub fn most_decayed(&self) -> Option<&OrderState> {
        self.orders.values().min_by(|a, b| {
            a.value()
                .total_cmp(&b.value())
                .then_with(|| a.order().arrival_key().cmp(&b.order().arrival_key()))
        })
    }

    /// Held order ids sorted by arrival, oldest first.
    pub fn ids_by_arrival(&self) -> Vec<OrderId> {
        let mut keys: Vec<_> = self.orders.values().map(|s| s.order().arrival_key()).collect();
        keys.sort();
        keys.into_iter().map(|(_, id)| id).collect()
    }

    /// Sets the modifier applied to current and future orders.
    pub fn set_decay_modifier(&mut self, decay_modifier: f64) {
        self.decay_modifier = decay_modifier;
        for state in self.orders.values_mut() {
            state.set_decay_modifier(decay_modifier);
        }
    }

    /// Owned copy of the shelf contents, oldest arrival first.
    pub fn snapshot(&self) -> ShelfStatus {
        let mut orders: Vec<_> = self.orders.values().map(OrderState::status).collect();
        orders.sort_by_key(|s| (s.arrived_at_ms, s.id));
        ShelfStatus {
            kind: self.kind,
            capacity: self.capacity,
            decay_modifier: self.decay_modifier,
            orders,
        }
    }
}
