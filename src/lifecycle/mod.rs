//! Starting, wiring and stopping the simulation.

pub mod kitchen_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use kitchen_system::KitchenSystem;
