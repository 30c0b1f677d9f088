//! # Order Sources
//!
//! The three timed event producers that drive the kitchen. Each one runs in its
//! own task, talks to the kitchen only through a cloned [`KitchenClient`], and
//! stops when the shared `watch` shutdown signal flips to `true` or the kitchen
//! goes away.
//!
//! - [`OrderSource`] - Poisson arrivals of catalog orders
//! - [`CourierSource`] - couriers at uniformly random intervals
//! - [`HeartbeatSource`] - fixed-period aging ticks
//!
//! [`KitchenClient`]: crate::clients::KitchenClient

pub mod catalog;
pub mod courier_source;
pub mod heartbeat;
pub mod order_source;

pub use catalog::*;
pub use courier_source::*;
pub use heartbeat::*;
pub use order_source::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the generator for one producer.
///
/// With a seed, every producer gets its own deterministic stream derived from
/// it. Without one, each draws fresh entropy.
pub fn producer_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}
