//! Error types for the kitchen actor.

use crate::shelf::ShelfError;
use thiserror::Error;

/// Errors a [`KitchenClient`](crate::clients::KitchenClient) call can return.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// The actor's request channel is closed; the kitchen has shut down.
    #[error("Kitchen actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Kitchen actor dropped response channel")]
    ActorDropped,

    #[error(transparent)]
    Shelf(#[from] ShelfError),
}
