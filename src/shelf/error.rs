//! Error types for shelf operations.

use crate::model::{OrderId, ShelfKind};
use thiserror::Error;

/// Errors that can occur during shelf operations.
///
/// `CapacityExceeded` never leaves the kitchen: the shelf manager always makes
/// room (or rejects the arrival) before it adds. `Empty` is a benign no-op for
/// couriers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShelfError {
    /// The shelf already holds `capacity` orders.
    #[error("Shelf {shelf} is full (capacity {capacity})")]
    CapacityExceeded { shelf: ShelfKind, capacity: usize },

    /// No order with this id is held.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The shelf holds no orders.
    #[error("Shelf {0} is empty")]
    Empty(ShelfKind),

    /// An order with this id is already held.
    #[error("Duplicate order: {0}")]
    DuplicateOrder(OrderId),

    /// The overflow modifier must be greater than the home modifier of 1.
    #[error("Invalid decay modifier: {0}")]
    InvalidDecayModifier(f64),

    /// A home shelf was offered an order of another temperature.
    #[error("Order {order} does not belong on shelf {shelf}")]
    WrongShelf { order: OrderId, shelf: ShelfKind },
}
