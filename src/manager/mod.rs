//! # Shelf Manager
//!
//! Owns one [`Shelf`] per [`Temperature`] plus the shared overflow shelf and
//! implements every algorithm that touches more than one shelf:
//!
//! - **Routing** ([`ShelfManager::place_order`]): home shelf, spillover to
//!   overflow, eviction, rejection.
//! - **Aging** ([`ShelfManager::on_heartbeat`]): age everything, waste or relocate
//!   expired orders, then reclaim overflow orders into free home slots.
//! - **Pickup** ([`ShelfManager::dispatch_courier`]): remove one order from a home
//!   shelf and classify it as delivered or wasted.
//! - **Snapshot** ([`ShelfManager::snapshot`]): owned copy of every shelf.
//!
//! ## Concurrency Model
//!
//! `ShelfManager` is plain synchronous state. Every mutating method takes
//! `&mut self`, so a cross-shelf move is atomic with respect to the capacity
//! checks on both shelves as long as one owner drives it. That owner is the
//! [`KitchenActor`](crate::kitchen_actor::KitchenActor), which processes one
//! request at a time.

pub mod outcome;
pub mod policy;

pub use outcome::*;
pub use policy::*;

use crate::config::{ConfigError, KitchenConfig, ShelvesConfig};
use crate::model::{
    KitchenStats, KitchenStatus, Order, OrderId, OrderStatus, ShelfCounts, ShelfKind, Temperature,
};
use crate::shelf::{OrderState, RemovalPolicy, Shelf, ShelfError};
use std::time::Duration;
use tracing::{debug, info};

/// Decay modifier of every home shelf.
pub const HOME_DECAY_MODIFIER: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct ShelfManager {
    hot: Shelf,
    cold: Shelf,
    frozen: Shelf,
    overflow: Shelf,
    policy: ShelfPolicy,
    stats: KitchenStats,
}

impl ShelfManager {
    /// Creates a manager with empty shelves.
    pub fn new(shelves: &ShelvesConfig, policy: ShelfPolicy) -> Self {
        let home = |temperature, capacity| {
            Shelf::new(ShelfKind::Home(temperature), capacity, HOME_DECAY_MODIFIER)
        };
        Self {
            hot: home(Temperature::Hot, shelves.hot_capacity),
            cold: home(Temperature::Cold, shelves.cold_capacity),
            frozen: home(Temperature::Frozen, shelves.frozen_capacity),
            overflow: Shelf::new(
                ShelfKind::Overflow,
                shelves.overflow_capacity,
                shelves.overflow_decay_modifier,
            ),
            policy,
            stats: KitchenStats::default(),
        }
    }

    /// Validates `config` and builds the manager from it.
    pub fn from_config(config: &KitchenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(&config.shelves, config.policy))
    }

    pub fn stats(&self) -> KitchenStats {
        self.stats
    }

    pub fn home(&self, temperature: Temperature) -> &Shelf {
        match temperature {
            Temperature::Hot => &self.hot,
            Temperature::Cold => &self.cold,
            Temperature::Frozen => &self.frozen,
        }
    }

    pub fn overflow(&self) -> &Shelf {
        &self.overflow
    }

    /// Number of orders currently on any shelf.
    pub fn held(&self) -> usize {
        self.shelves().iter().map(|s| s.len()).sum()
    }

    // =========================================================================
    // Routing
    // =========================================================================

    /// Places an arriving order.
    ///
    /// 1. Home shelf has room: add it there.
    /// 2. Home shelf full, overflow has room: move the home shelf's oldest order
    ///    to overflow and add the arrival to the freed home slot.
    /// 3. Both full: discard the most-decayed order among overflow and the home
    ///    candidate if the eviction policy allows it, otherwise reject the arrival.
    ///
    /// # Errors
    /// `DuplicateOrder` if an order with the same id is already held. Capacity
    /// conditions are never returned as errors.
    pub fn place_order(&mut self, order: Order) -> Result<ArrivalOutcome, ShelfError> {
        let order_id = order.id;
        if self.find(order_id).is_some() {
            return Err(ShelfError::DuplicateOrder(order_id));
        }
        let temperature = order.temperature;
        let kind = ShelfKind::Home(temperature);
        let policy = self.policy;
        self.stats.received += 1;

        let (home, overflow) = self.home_and_overflow(temperature);
        if home.has_room() {
            home.add(order)?;
            info!(%order_id, shelf = %kind, size = home.len(), "Shelved");
            return Ok(ArrivalOutcome::Shelved {
                order_id,
                shelf: kind,
            });
        }

        let candidate = select(home, policy.displace).ok_or(ShelfError::Empty(kind))?;

        if overflow.has_room() {
            let displaced = home.remove_by_id(candidate)?;
            overflow.insert(displaced)?;
            home.add(order)?;
            debug!(%order_id, moved = %candidate, overflow = overflow.len(), "Displaced to overflow");
            self.stats.relocated += 1;
            return Ok(ArrivalOutcome::Displaced {
                order_id,
                moved: candidate,
            });
        }

        let candidate_value = home
            .get(candidate)
            .map(OrderState::value)
            .ok_or(ShelfError::NotFound(candidate))?;
        let (victim, victim_value, on_overflow) = match overflow.most_decayed() {
            Some(state) if state.value() < candidate_value => (state.order().id, state.value(), true),
            _ => (candidate, candidate_value, false),
        };
        let evictable = match policy.eviction {
            EvictionPolicy::ExpiredOnly => victim_value <= 0.0,
            EvictionPolicy::MostDecayed => true,
        };

        if !evictable {
            let status = OrderState::new(order, home.decay_modifier()).status();
            info!(%order_id, shelf = %kind, "Rejected, no room");
            self.stats.wasted += 1;
            self.stats.rejected += 1;
            return Ok(ArrivalOutcome::Rejected {
                wasted: WastedOrder {
                    status,
                    reason: WasteReason::Rejected,
                    shelf: None,
                },
            });
        }

        let (wasted, moved) = if on_overflow {
            let evicted = overflow.remove_by_id(victim)?;
            let displaced = home.remove_by_id(candidate)?;
            overflow.insert(displaced)?;
            let wasted = WastedOrder {
                status: evicted.status(),
                reason: WasteReason::Evicted,
                shelf: Some(ShelfKind::Overflow),
            };
            (wasted, Some(candidate))
        } else {
            let evicted = home.remove_by_id(victim)?;
            let wasted = WastedOrder {
                status: evicted.status(),
                reason: WasteReason::Evicted,
                shelf: Some(kind),
            };
            (wasted, None)
        };
        home.add(order)?;
        info!(%order_id, evicted = %victim, value = victim_value, "Evicted to make room");

        self.stats.wasted += 1;
        if moved.is_some() {
            self.stats.relocated += 1;
        }
        Ok(ArrivalOutcome::Evicted {
            order_id,
            moved,
            wasted,
        })
    }

    // =========================================================================
    // Aging
    // =========================================================================

    /// Advances every order by `delta` and settles the consequences.
    ///
    /// 1. Age all shelves.
    /// 2. Expired home orders go to overflow if it has room, otherwise to waste.
    /// 3. Expired overflow orders go to waste.
    /// 4. Overflow orders are moved back to home shelves with free slots,
    ///    in [`ReclaimOrder`] order, with their modifier reset to 1.
    pub fn on_heartbeat(&mut self, delta: Duration) -> Result<AgingReport, ShelfError> {
        let seconds = delta.as_secs_f64();
        for shelf in self.shelves_mut() {
            shelf.age_all(seconds);
        }

        let mut report = AgingReport::default();
        for temperature in Temperature::ALL {
            let (home, overflow) = self.home_and_overflow(temperature);
            for state in home.extract_expired() {
                if overflow.has_room() {
                    debug!(order_id = %state.order().id, "Expired order moved to overflow");
                    report.relocated.push(state.order().id);
                    overflow.insert(state)?;
                } else {
                    report.wasted.push(WastedOrder {
                        status: state.status(),
                        reason: WasteReason::Expired,
                        shelf: Some(home.kind()),
                    });
                }
            }
        }

        for state in self.overflow.extract_expired() {
            report.wasted.push(WastedOrder {
                status: state.status(),
                reason: WasteReason::Expired,
                shelf: Some(ShelfKind::Overflow),
            });
        }

        report.reclaimed = self.reclaim()?;

        for wasted in &report.wasted {
            info!(order_id = %wasted.status.id, shelf = ?wasted.shelf, "Wasted, expired");
        }
        self.stats.wasted += report.wasted.len() as u64;
        self.stats.relocated += report.relocated.len() as u64;
        self.stats.reclaimed += report.reclaimed.len() as u64;
        Ok(report)
    }

    fn reclaim(&mut self) -> Result<Vec<OrderId>, ShelfError> {
        let mut candidates = self.overflow.ids_by_arrival();
        if self.policy.reclaim == ReclaimOrder::NewestFirst {
            candidates.reverse();
        }

        let mut reclaimed = Vec::new();
        for id in candidates {
            let Some(temperature) = self.overflow.get(id).map(|s| s.order().temperature) else {
                continue;
            };
            let (home, overflow) = self.home_and_overflow(temperature);
            if home.has_room() {
                let state = overflow.remove_by_id(id)?;
                home.insert(state)?;
                debug!(order_id = %id, shelf = %home.kind(), "Reclaimed from overflow");
                reclaimed.push(id);
            }
        }
        Ok(reclaimed)
    }

    // =========================================================================
    // Pickup
    // =========================================================================

    /// A courier arrives for `temperature` and takes one order off its home shelf.
    pub fn dispatch_courier(&mut self, temperature: Temperature) -> Result<PickupOutcome, ShelfError> {
        let pickup = self.policy.pickup;
        let shelf = self.home_mut(temperature);
        if shelf.is_empty() {
            debug!(shelf = %temperature, "Courier left empty-handed");
            return Ok(PickupOutcome::NoOrder(temperature));
        }

        let state = shelf.remove_one(pickup)?;
        let status = state.status();
        if state.is_expired() {
            info!(order_id = %status.id, value = status.value, "Picked up expired order");
            self.stats.wasted += 1;
            return Ok(PickupOutcome::Wasted(WastedOrder {
                status,
                reason: WasteReason::Expired,
                shelf: Some(ShelfKind::Home(temperature)),
            }));
        }

        info!(order_id = %status.id, value = status.value, "Delivered");
        self.stats.delivered += 1;
        Ok(PickupOutcome::Delivered(status))
    }

    // =========================================================================
    // Lookup & Snapshot
    // =========================================================================

    fn find(&self, id: OrderId) -> Option<&OrderState> {
        self.shelves().into_iter().find_map(|shelf| shelf.get(id))
    }

    /// Current status of one held order.
    pub fn lookup(&self, id: OrderId) -> Result<OrderStatus, ShelfError> {
        self.find(id)
            .map(OrderState::status)
            .ok_or(ShelfError::NotFound(id))
    }

    pub fn snapshot(&self) -> KitchenStatus {
        KitchenStatus {
            shelves: self.shelves().iter().map(|s| s.snapshot()).collect(),
            stats: self.stats,
        }
    }

    pub fn counts(&self) -> ShelfCounts {
        ShelfCounts {
            hot: self.hot.len(),
            cold: self.cold.len(),
            frozen: self.frozen.len(),
            overflow: self.overflow.len(),
        }
    }

    /// Changes the overflow modifier for held and future overflow orders.
    pub fn set_overflow_decay_modifier(&mut self, decay_modifier: f64) -> Result<(), ShelfError> {
        if !decay_modifier.is_finite() || decay_modifier <= HOME_DECAY_MODIFIER {
            return Err(ShelfError::InvalidDecayModifier(decay_modifier));
        }
        self.overflow.set_decay_modifier(decay_modifier);
        Ok(())
    }

    // --- shelf access ---

    fn shelves(&self) -> [&Shelf; 4] {
        [&self.hot, &self.cold, &self.frozen, &self.overflow]
    }

    fn shelves_mut(&mut self) -> [&mut Shelf; 4] {
        [&mut self.hot, &mut self.cold, &mut self.frozen, &mut self.overflow]
    }

    fn home_mut(&mut self, temperature: Temperature) -> &mut Shelf {
        match temperature {
            Temperature::Hot => &mut self.hot,
            Temperature::Cold => &mut self.cold,
            Temperature::Frozen => &mut self.frozen,
        }
    }

    /// Disjoint borrows of a home shelf and overflow for cross-shelf moves.
    fn home_and_overflow(&mut self, temperature: Temperature) -> (&mut Shelf, &mut Shelf) {
        let home = match temperature {
            Temperature::Hot => &mut self.hot,
            Temperature::Cold => &mut self.cold,
            Temperature::Frozen => &mut self.frozen,
        };
        (home, &mut self.overflow)
    }
}

fn select(shelf: &Shelf, policy: RemovalPolicy) -> Option<OrderId> {
    match policy {
        RemovalPolicy::Oldest => shelf.oldest(),
        RemovalPolicy::Newest => shelf.newest(),
    }
    .map(|s| s.order().id)
}
