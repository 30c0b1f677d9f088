//! Results reported by the shelf manager.
//!
//! Capacity and routing conditions are resolved inside the manager. Only the
//! terminal events (delivered, wasted, rejected) and the non-terminal moves
//! between shelves come back to the caller, as plain values.

use crate::model::{OrderId, OrderStatus, ShelfKind, Temperature};

/// Why an order was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteReason {
    /// Its value reached zero on a shelf or before pickup.
    Expired,
    /// It was discarded to make room for an arrival.
    Evicted,
    /// It arrived and no slot could be freed for it.
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WastedOrder {
    pub status: OrderStatus,
    pub reason: WasteReason,
    /// The shelf it was on, `None` for a rejected arrival.
    pub shelf: Option<ShelfKind>,
}

/// What happened to an arriving order.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrivalOutcome {
    /// The home shelf had room.
    Shelved { order_id: OrderId, shelf: ShelfKind },
    /// The home shelf was full; `moved` went to overflow to make room.
    Displaced { order_id: OrderId, moved: OrderId },
    /// Both shelves were full; `wasted` was discarded to make room. If the
    /// victim came from overflow, `moved` is the home order that took its place.
    Evicted {
        order_id: OrderId,
        moved: Option<OrderId>,
        wasted: WastedOrder,
    },
    /// No slot could be freed; the arriving order itself was wasted.
    Rejected { wasted: WastedOrder },
}

impl ArrivalOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ArrivalOutcome::Rejected { .. })
    }

    pub fn wasted(&self) -> Option<&WastedOrder> {
        match self {
            ArrivalOutcome::Evicted { wasted, .. } | ArrivalOutcome::Rejected { wasted } => {
                Some(wasted)
            }
            _ => None,
        }
    }
}

/// What a courier left with.
#[derive(Debug, Clone, PartialEq)]
pub enum PickupOutcome {
    Delivered(OrderStatus),
    /// The order had already expired when it was taken off the shelf.
    Wasted(WastedOrder),
    /// The shelf was empty; the courier left empty-handed.
    NoOrder(Temperature),
}

/// Everything one heartbeat did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgingReport {
    pub wasted: Vec<WastedOrder>,
    /// Expired home orders offered to overflow.
    pub relocated: Vec<OrderId>,
    /// Overflow orders moved back to their home shelf.
    pub reclaimed: Vec<OrderId>,
}
