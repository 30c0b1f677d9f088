//! Type-safe wrappers around the kitchen actor's channel, and the status view boundary.

pub mod kitchen_client;
pub mod status_view;

pub use kitchen_client::*;
pub use status_view::*;
